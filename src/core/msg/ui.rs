use serde::{Deserialize, Serialize};

use crate::core::state::ui::{Dialog, Tab};
use crate::domain::SwipeDirection;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    TabSelected(Tab),
    NextTabSelected,
    PrevTabSelected,

    DialogOpened(Dialog),
    DialogClosed,
    /// Pass/like pressed inside the detail dialog
    DetailSwiped(SwipeDirection),

    NextMatchSelected { max_index: usize },
    PrevMatchSelected,
}
