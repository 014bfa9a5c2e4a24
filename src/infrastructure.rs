//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - Bio text editing engine

pub mod cli;
pub mod config;
pub mod tui;
