use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastMsg {
    /// The display duration of toast `id` has elapsed
    Expired { id: u64 },
    /// Dismiss every visible toast
    Cleared,
}
