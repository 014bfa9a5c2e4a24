use serde::{Deserialize, Serialize};

/// Placeholder avatar used for the local user, who never uploads a picture.
pub const PLACEHOLDER_AVATAR: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=User";

/// A deck candidate. Seed data only: never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub image: String,
    pub verified: bool,
    pub interests: Vec<String>,
    pub distance_km: u32,
}

impl Profile {
    /// First letter of the name, shown where the image cannot be.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// "Anna, 25"
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}

/// Decision taken on the current deck entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Swipe left
    Pass,
    /// Swipe right
    Like,
}

impl SwipeDirection {
    pub fn is_like(&self) -> bool {
        *self == SwipeDirection::Like
    }
}

/// The local user. Edited in place from the profile tab and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub bio: String,
    pub interests: Vec<String>,
    pub avatar: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            age: 25,
            bio: "Tell us about yourself...".to_string(),
            interests: vec!["Travel".to_string(), "Music".to_string()],
            avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }
}

impl UserProfile {
    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }

    /// Adds a trimmed interest tag. Empty tags and duplicates are ignored.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        let interest = interest.trim();
        if interest.is_empty() || self.interests.iter().any(|i| i == interest) {
            return false;
        }
        self.interests.push(interest.to_string());
        true
    }

    pub fn remove_interest(&mut self, index: usize) -> Option<String> {
        (index < self.interests.len()).then(|| self.interests.remove(index))
    }

    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}
