//! Header component
//!
//! App title, the filters shortcut and the tab bar.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::core::state::{ui::Tab, AppState};

#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn tab_titles(state: &AppState) -> Vec<String> {
        Tab::iter()
            .map(|tab| match tab {
                Tab::Matches => format!("Matches ({})", state.deck.liked().len()),
                tab => tab.to_string(),
            })
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let title = Block::default()
            .title_top(Line::styled("💘 LoveMatch", styles.get_or_default("accent")))
            .title_top(Line::styled("s: filters", styles.get_or_default("muted")).right_aligned());
        frame.render_widget(title, rows[0]);

        let tabs = Tabs::new(Self::tab_titles(state))
            .select(state.ui.tab.index())
            .highlight_style(styles.get_or_default("selected"))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(tabs, rows[1]);
    }
}
