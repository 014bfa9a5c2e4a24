use serde::{Deserialize, Serialize};

/// Messages for the filter/settings dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterMsg {
    /// Start editing a draft copy of the applied settings
    Opened,
    FocusNext,
    FocusPrev,
    /// Move the focused control by `delta` steps; flips the switch when it is focused
    Adjusted(i32),
    /// Flip the verified-only switch when it is focused
    Toggled,
    /// Commit the draft
    Applied,
    /// Drop the draft
    Cancelled,
}
