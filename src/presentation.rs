//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components, one per screen region
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
