use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::{
    state::editor::{CursorPosition, TextAreaState},
    textarea_engine::TextAreaEngine,
};

/// Engine based on tui-textarea: hydrates a throwaway TextArea from the snapshot,
/// feeds it the keys and reads the result back.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// TextArea holding the snapshot's content with the cursor in place
    pub fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let lines: Vec<String> = snapshot.content.split('\n').map(str::to_owned).collect();
        let mut textarea = TextArea::new(lines);
        let line = u16::try_from(snapshot.cursor_position.line).unwrap_or(u16::MAX);
        let column = u16::try_from(snapshot.cursor_position.column).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(line, column));
        textarea
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        let (line, column) = textarea.cursor();
        TextAreaState::new(textarea.lines().join("\n"), CursorPosition { line, column })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_inserts_at_cursor() {
        let snapshot = TextAreaState::new("ab".into(), CursorPosition { line: 0, column: 2 });

        let out = TuiTextAreaEngine.apply_keys(
            &snapshot,
            &[press(KeyCode::Left), press(KeyCode::Char('X'))],
        );

        assert_eq!(out.content, "aXb");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 2 });
        assert_eq!(snapshot.content, "ab");
    }

    #[test]
    fn test_backspace_and_newline() {
        let snapshot = TextAreaState::with_cursor_at_end("Hi there".into());

        let out = TuiTextAreaEngine.apply_keys(
            &snapshot,
            &[
                press(KeyCode::Backspace),
                press(KeyCode::Enter),
                press(KeyCode::Char('!')),
            ],
        );

        assert_eq!(out.content, "Hi ther\n!");
        assert_eq!(out.cursor_position, CursorPosition { line: 1, column: 1 });
    }
}
