use serde::{Deserialize, Serialize};

use crate::domain::Notification;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects; the update functions only ever describe them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Deliver `DeckMsg::SwipeSettled { generation }` after `delay_ms`
    ScheduleSwipeSettle { generation: u64, delay_ms: u64 },
    /// Deliver `ToastMsg::Expired { id }` after `after_ms`
    ScheduleToastExpiry { id: u64, after_ms: u64 },
    /// Show a toast. Routed into ToastState by the update coordinator
    Notify(Notification),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogInfo { message: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command completes later, through a message sent back to the runtime
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ScheduleSwipeSettle { .. } | Cmd::ScheduleToastExpiry { .. } => true,
            Cmd::Notify(_) | Cmd::Tui(_) | Cmd::LogInfo { .. } | Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }
}
