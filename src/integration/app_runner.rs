use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, TuiLike},
    integration::{renderer::Renderer, runtime::Runtime},
};

/// Drives the runtime from terminal events and renders after every cycle
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
}

impl AppRunner {
    pub fn new(initial_state: AppState, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        let mut runtime = Runtime::new_with_executor(initial_state);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        if let Err(e) = runtime.add_tui_sender(tui_cmd_tx) {
            log::error!("{e}");
        }

        Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit or the event source closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let event = {
                let mut guard = self.tui.lock().await;
                guard.next().await
            };
            let Some(event) = event else {
                log::info!("event source closed");
                break;
            };
            self.handle_event(event);
            self.run_one_cycle().await?;

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event) {
        let raw = match event {
            tui::Event::Quit => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Render => RawMsg::Render,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Error => RawMsg::Error("terminal event error".to_string()),
            tui::Event::Init
            | tui::Event::Closed
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    /// One update cycle, host-side commands, suspend handling and a render
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }

        if self.runtime.state().system.should_suspend {
            {
                let mut tui = self.tui.lock().await;
                tui.suspend()?;
                // Execution continues here once the shell resumes the process
                tui.resume()?;
            }
            self.runtime.send_raw_msg(RawMsg::Resume);
            if let Err(e) = self.runtime.run_update_cycle() {
                log::error!("Runtime error: {e}");
            }
        }

        self.render().await
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        self.renderer.render(&self.tui, &state).await
    }
}
