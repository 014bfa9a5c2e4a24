//! Toast component
//!
//! Stacks visible notifications in the bottom-right corner, newest at the bottom.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Default)]
pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.config.styles.get_or_default("toast");
        let width = TOAST_WIDTH.min(area.width);
        let mut bottom = area.bottom();

        for toast in state.toasts.visible().collect::<Vec<_>>().into_iter().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            let rect = Rect::new(area.right() - width, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
            bottom -= TOAST_HEIGHT;

            let notification = &toast.notification;
            let body = Paragraph::new(vec![
                Line::from(notification.title.as_str()).bold(),
                Line::from(notification.description.as_str()),
            ])
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            frame.render_widget(Clear, rect);
            frame.render_widget(body, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Notification, ProfileProvider, SeedProfiles},
        presentation::components::test_support::render_rows,
    };

    #[test]
    fn test_latest_toast_in_bottom_right() {
        let mut state = AppState::default();
        let profile = &SeedProfiles.profiles()[0];
        state.toasts.push(Notification::like_sent(profile, 2000));

        let rows = render_rows(60, 10, |frame| {
            let area = frame.area();
            ToastComponent::new().view(&state, frame, area)
        });

        assert!(rows[8].contains("You liked Anna"));
        assert!(rows[8].starts_with("                    │"));
        assert!(rows[0].trim().is_empty());
    }

    #[test]
    fn test_nothing_without_toasts() {
        let state = AppState::default();

        let rows = render_rows(60, 10, |frame| {
            let area = frame.area();
            ToastComponent::new().view(&state, frame, area)
        });

        assert!(rows.iter().all(|row| row.trim().is_empty()));
    }
}
