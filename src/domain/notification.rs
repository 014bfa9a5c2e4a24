use serde::{Deserialize, Serialize};

use super::profile::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    LikeSent,
    DeckExhausted,
    FiltersApplied,
}

/// Transient message for the toast surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn like_sent(profile: &Profile, duration_ms: u64) -> Self {
        Self {
            kind: NotificationKind::LikeSent,
            title: "💖 Like sent!".to_string(),
            description: format!("You liked {}", profile.name),
            duration_ms,
        }
    }

    pub fn deck_exhausted(duration_ms: u64) -> Self {
        Self {
            kind: NotificationKind::DeckExhausted,
            title: "🎉 You have seen every profile".to_string(),
            description: "New profiles are coming soon!".to_string(),
            duration_ms,
        }
    }

    pub fn filters_applied(duration_ms: u64) -> Self {
        Self {
            kind: NotificationKind::FiltersApplied,
            title: "✅ Settings saved".to_string(),
            description: "Filters applied to search".to_string(),
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::provider::{ProfileProvider, SeedProfiles};

    #[test]
    fn test_like_sent_names_the_profile() {
        let anna = &SeedProfiles.profiles()[0];
        let notification = Notification::like_sent(anna, 2000);

        assert_eq!(notification.kind, NotificationKind::LikeSent);
        assert_eq!(notification.description, "You liked Anna");
        assert_eq!(notification.duration_ms, 2000);
    }

    #[test]
    fn test_notification_serialization() -> serde_json::Result<()> {
        let notification = Notification::deck_exhausted(3000);
        let serialized = serde_json::to_string(&notification)?;
        let deserialized: Notification = serde_json::from_str(&serialized)?;
        assert_eq!(notification, deserialized);
        Ok(())
    }
}
