use serde::{Deserialize, Serialize};

use crate::domain::{Profile, SwipeDirection};

/// Messages specific to DeckState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeckMsg {
    /// Decide on the current profile
    Swipe(SwipeDirection),
    /// The swipe transition scheduled under `generation` has elapsed
    SwipeSettled { generation: u64 },
    /// Replace the visible deck (filters applied)
    ProfilesReplaced(Vec<Profile>),
}
