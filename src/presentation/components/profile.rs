//! Profile component
//!
//! The local user's profile: bio, interests and the verification prompt.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::widgets::{badges::Badges, bio_editor::BioEditorWidget},
};

const BIO_EDITOR_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let editor = &state.editor;
        let profile = editor.profile();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1))
            .title(" My profile ")
            .title(Line::styled(" [Edit profile] ", styles.get_or_default("accent")).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let bio_height = if editor.is_editing_bio() {
            BIO_EDITOR_HEIGHT
        } else {
            3
        };
        let [identity, bio_area, interests_label, interests_area, add_area, _, verify_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(bio_height),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .areas(inner);

        let initial = profile.name.chars().next().unwrap_or('?');
        let identity_text = Text::from(vec![
            Line::from(vec![
                Span::styled(format!("( {initial} )  "), styles.get_or_default("accent")),
                Span::styled(profile.headline(), styles.get_or_default("title")),
            ]),
            Line::styled(format!("🖼  {}", profile.avatar), styles.get_or_default("muted")),
        ]);
        frame.render_widget(Paragraph::new(identity_text), identity);

        if editor.is_editing_bio() {
            frame.render_widget(
                BioEditorWidget::new(editor.bio()).border_style(styles.get_or_default("accent")),
                bio_area,
            );
        } else {
            let bio = Text::from(vec![
                Line::styled("About me", styles.get_or_default("title")),
                Line::from(profile.bio.as_str()),
            ]);
            frame.render_widget(Paragraph::new(bio).wrap(Wrap { trim: true }), bio_area);
        }

        frame.render_widget(
            Paragraph::new(Line::styled("Interests", styles.get_or_default("title"))),
            interests_label,
        );
        frame.render_widget(
            Badges::new(&profile.interests)
                .style(styles.get_or_default("badge"))
                .selected(editor.selected_interest(), styles.get_or_default("selected")),
            interests_area,
        );

        let add_line = match editor.pending_interest() {
            Some(buffer) => Line::from(vec![
                Span::styled("New interest: ", styles.get_or_default("accent")),
                Span::raw(buffer.to_string()),
                Span::raw("▏"),
            ]),
            None => Line::styled("+ Add interest", styles.get_or_default("muted")),
        };
        frame.render_widget(Paragraph::new(add_line), add_area);

        let verify = Text::from(vec![
            Line::from(vec![
                Span::styled("✓ Verification  ", styles.get_or_default("verified")),
                Span::styled("[Verify]", styles.get_or_default("accent")),
            ]),
            Line::styled(
                "Confirm your profile to earn more trust",
                styles.get_or_default("muted"),
            ),
        ]);
        frame.render_widget(Paragraph::new(verify), verify_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{msg::editor::EditorMsg, textarea_engine::NoopTextAreaEngine},
        presentation::components::test_support::render_screen,
    };

    fn screen(state: &AppState) -> String {
        render_screen(70, 22, |frame| {
            let area = frame.area();
            ProfileComponent::new().view(state, frame, area)
        })
    }

    #[test]
    fn test_browsing_profile() {
        let state = AppState::default();

        let screen = screen(&state);

        assert!(screen.contains("You, 25"));
        assert!(screen.contains("[Edit profile]"));
        assert!(screen.contains("Tell us about yourself..."));
        assert!(screen.contains("Travel"));
        assert!(screen.contains("+ Add interest"));
        assert!(screen.contains("[Verify]"));
    }

    #[test]
    fn test_bio_editor_replaces_bio_text() {
        let mut state = AppState::default();
        state.editor.update(EditorMsg::BioEditStarted, &NoopTextAreaEngine);

        let screen = screen(&state);

        assert!(screen.contains("Bio (Esc: done)"));
        assert!(!screen.contains("About me"));
    }

    #[test]
    fn test_pending_interest_is_shown() {
        let mut state = AppState::default();
        state.editor.update(EditorMsg::InterestInputStarted, &NoopTextAreaEngine);
        state.editor.update(EditorMsg::InterestInputChar('Y'), &NoopTextAreaEngine);

        let screen = screen(&state);

        assert!(screen.contains("New interest: Y"));
        assert!(!screen.contains("+ Add interest"));
    }
}
