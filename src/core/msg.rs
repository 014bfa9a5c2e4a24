use serde::{Deserialize, Serialize};

pub mod deck;
pub mod editor;
pub mod filter;
pub mod system;
pub mod toast;
pub mod ui;

use deck::DeckMsg;
use editor::EditorMsg;
use filter::FilterMsg;
use system::SystemMsg;
use toast::ToastMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and are the only way state changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Swipe deck operations (delegated to DeckState)
    Deck(DeckMsg),

    // Tabs and dialogs (delegated to UiState, coordinated with the deck)
    Ui(UiMsg),

    // Filter dialog operations (delegated to FilterState)
    Filter(FilterMsg),

    // Profile editor operations (delegated to EditorState)
    Editor(EditorMsg),

    // Toast lifecycle (delegated to ToastState)
    Toast(ToastMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Toast(_) | Msg::Deck(DeckMsg::SwipeSettled { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SwipeDirection;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Toast(ToastMsg::Expired { id: 1 }).is_frequent());
        assert!(Msg::Deck(DeckMsg::SwipeSettled { generation: 1 }).is_frequent());
        assert!(!Msg::Deck(DeckMsg::Swipe(SwipeDirection::Like)).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Deck(DeckMsg::Swipe(SwipeDirection::Like)),
            Msg::Deck(DeckMsg::Swipe(SwipeDirection::Pass))
        );
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Deck(DeckMsg::SwipeSettled { generation: 7 });
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
