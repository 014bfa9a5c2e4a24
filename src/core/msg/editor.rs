use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages for the user profile editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorMsg {
    BioEditStarted,
    BioEditFinished,
    /// Key forwarded to the bio textarea while editing
    BioInput(KeyEvent),

    NextInterestSelected,
    PrevInterestSelected,
    InterestRemoved,

    InterestInputStarted,
    InterestInputChar(char),
    InterestInputBackspace,
    InterestInputCommitted,
    InterestInputCancelled,
}
