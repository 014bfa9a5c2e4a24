use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::{deck::DeckMsg, toast::ToastMsg, Msg},
};

/// Command executor that turns timers into messages sent back to the runtime
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new(msg_sender: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            msg_sender,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand on the host side
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ScheduleSwipeSettle {
                generation,
                delay_ms,
            } => self.schedule(
                *delay_ms,
                Msg::Deck(DeckMsg::SwipeSettled {
                    generation: *generation,
                }),
            ),

            Cmd::ScheduleToastExpiry { id, after_ms } => {
                self.schedule(*after_ms, Msg::Toast(ToastMsg::Expired { id: *id }))
            }

            Cmd::Notify(notification) => {
                // The update coordinator turns these into toasts before they get here
                log::warn!("unrouted notification dropped: {}", notification.title);
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, collecting a log line per command
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .map(|cmd| match self.execute_command(cmd) {
                Ok(()) => format!("✓ Executed: {}", cmd.name()),
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    error_msg
                }
            })
            .collect()
    }

    /// Deliver `msg` after `delay_ms`. Timers are never cancelled; stale ones are
    /// recognised by generation or id when they arrive.
    fn schedule(&self, delay_ms: u64, msg: Msg) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("no async runtime; dropping timer for {msg:?}");
            return;
        };
        let tx = self.msg_sender.clone();
        handle.spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            if tx.send(msg).is_err() {
                log::debug!("runtime gone before timer fired");
            }
        });
    }
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::ScheduleSwipeSettle { .. } => "ScheduleSwipeSettle".to_string(),
            Cmd::ScheduleToastExpiry { .. } => "ScheduleToastExpiry".to_string(),
            Cmd::Notify(_) => "Notify".to_string(),
            Cmd::Tui(_) => "Tui".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
        }
    }
}
