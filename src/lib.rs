//! # LoveMatch - a swipe-deck dating demo for the terminal
//!
//! Browse a deck of profiles, like or pass them, review your likes, tune
//! search filters and edit your own profile. Everything lives in memory.
//!
//! ## Architecture Overview
//!
//! This crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): Application state, split into slices
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Functions that transform state
//! - **Command** (`core::cmd`): Side effects such as timers
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use lovematch::{
//!     core::msg::{deck::DeckMsg, Msg},
//!     domain::{SeedProfiles, SwipeDirection},
//!     update, AppState,
//! };
//!
//! let state = AppState::new(&SeedProfiles);
//!
//! let (state, commands) = update(Msg::Deck(DeckMsg::Swipe(SwipeDirection::Like)), state);
//!
//! // The like is recorded at once; the deck advances when the swipe settles
//! assert_eq!(state.deck.liked().len(), 1);
//! assert_eq!(state.deck.cursor(), 0);
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`](crate::core) - State, messages, update and commands
//! - [`domain`] - Profiles, filters and notifications
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
