//! Discover component
//!
//! The swipe deck: the current profile card and the pass/like hints.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::widgets::profile_card::ProfileCard};

const CARD_WIDTH: u16 = 64;

#[derive(Debug, Clone, Default)]
pub struct DiscoverComponent;

impl DiscoverComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let Some(profile) = state.current_profile() else {
            let text = Text::from(vec![
                Line::from("💔"),
                Line::styled("New profiles coming soon!", styles.get_or_default("title")),
                Line::styled("Check back later", styles.get_or_default("muted")),
            ]);
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(area);
            frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
            return;
        };

        let [card_area, counter_area, hints_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [card_area] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(card_area);

        let leaving = state.deck.transition().map(|t| t.direction);
        frame.render_widget(ProfileCard::new(profile, styles).leaving(leaving), card_area);

        let counter = format!("{} / {}", state.deck.cursor() + 1, state.deck.len());
        frame.render_widget(
            Paragraph::new(counter)
                .style(styles.get_or_default("muted"))
                .alignment(Alignment::Center),
            counter_area,
        );

        let hints = Line::from(vec![
            Span::styled("✗ Pass (h/←)", styles.get_or_default("pass")),
            Span::raw("    "),
            Span::raw("Details (i)"),
            Span::raw("    "),
            Span::styled("Like (l/→) ♥", styles.get_or_default("like")),
        ]);
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), hints_area);
    }
}
