//! Reusable widgets
//!
//! Widgets know nothing about the application state; components pick the
//! data out of `AppState` and hand it to them.

pub mod badges;
pub mod bio_editor;
pub mod profile_card;
pub mod range_slider;
pub mod shrink_text;
