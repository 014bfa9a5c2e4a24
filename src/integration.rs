//! Integration layer
//!
//! Wires the pure core to the terminal:
//! - Runtime: message queues and command execution
//! - AppRunner: event loop over a `TuiLike`
//! - Renderer: draws the component tree

pub mod app_runner;
pub mod renderer;
pub mod runtime;
