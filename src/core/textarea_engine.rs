use crossterm::event::KeyEvent;

use crate::core::state::editor::TextAreaState;

/// Applies key events to a textarea snapshot and returns the new snapshot.
/// Implementations must be deterministic so the update path stays pure.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// Engine that leaves the snapshot untouched
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::editor::CursorPosition;

    #[test]
    fn test_noop_engine_returns_same_snapshot() {
        let engine = NoopTextAreaEngine;
        let snapshot = TextAreaState::new("hello".into(), CursorPosition { line: 0, column: 5 });
        assert_eq!(engine.apply_keys(&snapshot, &[]), snapshot);
    }
}
