//! Footer component
//!
//! Key hints for the current context and the status message.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{editor::EditorMode, ui::Tab, AppState};

#[derive(Debug, Clone, Default)]
pub struct FooterComponent;

impl FooterComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(state: &AppState) -> &'static str {
        if state.ui.dialog.is_some() {
            return "Esc close";
        }
        match state.ui.tab {
            Tab::Discover => "h pass · l like · i details · s filters · tab switch · q quit",
            Tab::Matches => "j/k select · s filters · tab switch · q quit",
            Tab::Profile => match state.editor.mode() {
                EditorMode::Browsing => {
                    "e edit bio · a add · d remove · j/k select · tab switch · q quit"
                }
                EditorMode::EditingBio => "Esc finish editing",
                EditorMode::AddingInterest(_) => "Enter add · Esc cancel",
            },
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [hints, status] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(Self::hints(state)).style(styles.get_or_default("muted")),
            hints,
        );
        if let Some(message) = &state.system.status_message {
            frame.render_widget(Paragraph::new(message.as_str()), status);
        }
    }
}
