//! Domain layer
//!
//! Plain data and rules that do not depend on the terminal:
//! - Profiles of deck candidates and of the local user
//! - Filter settings and their bounds
//! - Profile data providers
//! - Notifications shown as toasts
//! - Text layout helpers

pub mod filter;
pub mod notification;
pub mod profile;
pub mod provider;
pub mod text;

pub use filter::{AgeRange, FilterSettings};
pub use notification::{Notification, NotificationKind};
pub use profile::{Profile, SwipeDirection, UserProfile};
pub use provider::{ProfileProvider, SeedProfiles, StaticProfiles};
