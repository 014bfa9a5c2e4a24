//! Detail dialog component
//!
//! Full read-only view of the current deck profile, with pass and like.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::Dialog, AppState},
    presentation::{components::centered_rect, widgets::badges::Badges},
};

#[derive(Debug, Clone, Default)]
pub struct DetailDialogComponent;

impl DetailDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.ui.is_dialog_open(Dialog::Detail) {
            return;
        }
        let Some(profile) = state.current_profile() else {
            return;
        };
        let styles = &state.config.config.styles;

        let area = centered_rect(70, 20, area);
        let mut title = vec![Span::styled(
            format!(" {} ", profile.headline()),
            styles.get_or_default("title"),
        )];
        if profile.verified {
            title.push(Span::styled("✓ ", styles.get_or_default("verified")));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.get_or_default("accent"))
            .padding(Padding::horizontal(1))
            .title(Line::from(title))
            .title_bottom(
                Line::from(vec![
                    Span::styled(" ✗ Pass (h) ", styles.get_or_default("pass")),
                    Span::styled(" ♥ Like (l) ", styles.get_or_default("like")),
                    Span::raw(" Esc close "),
                ])
                .centered(),
            );
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [about, interests_label, interests] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        let text = Text::from(vec![
            Line::styled(format!("🖼  {}", profile.image), styles.get_or_default("muted")),
            Line::from(format!("📍 {} km away", profile.distance_km)),
            Line::default(),
            Line::styled("About", styles.get_or_default("title")),
            Line::from(profile.bio.as_str()),
        ]);
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), about);
        frame.render_widget(
            Paragraph::new(Line::styled("Interests", styles.get_or_default("title"))),
            interests_label,
        );
        frame.render_widget(
            Badges::new(&profile.interests).style(styles.get_or_default("badge")),
            interests,
        );
    }
}
