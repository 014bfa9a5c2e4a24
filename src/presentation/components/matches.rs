//! Matches component
//!
//! Profiles the user has liked, in like order.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{text, Profile},
};

#[derive(Debug, Clone, Default)]
pub struct MatchesComponent;

impl MatchesComponent {
    pub fn new() -> Self {
        Self
    }

    fn item<'a>(profile: &'a Profile, state: &AppState, width: usize) -> ListItem<'a> {
        let styles = &state.config.config.styles;
        let mut spans = vec![
            Span::styled(format!("({}) ", profile.initial()), styles.get_or_default("accent")),
            Span::raw(profile.headline()),
        ];
        if profile.verified {
            spans.push(Span::styled(" ✓", styles.get_or_default("verified")));
        }
        spans.push(Span::styled(
            format!("  · {} km away", profile.distance_km),
            styles.get_or_default("muted"),
        ));
        let bio = Line::styled(
            format!("    {}", text::ellipsize(&profile.bio, width.saturating_sub(4))),
            styles.get_or_default("muted"),
        );
        ListItem::new(vec![Line::from(spans), bio])
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let liked = state.deck.liked();

        if liked.is_empty() {
            let text = Text::from(vec![
                Line::styled("No matches yet", styles.get_or_default("title")),
                Line::styled(
                    "Like profiles on the Discover tab to see them here",
                    styles.get_or_default("muted"),
                ),
            ]);
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(area);
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
            return;
        }

        // Room left after the padding and the highlight symbol
        let width = usize::from(area.width.saturating_sub(4));
        let list = List::new(liked.iter().map(|profile| Self::item(profile, state, width)))
            .block(
                Block::default()
                    .padding(Padding::horizontal(1))
                    .title(format!("Your likes ({})", liked.len())),
            )
            .highlight_style(styles.get_or_default("selected"))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(state.ui.match_selection);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
