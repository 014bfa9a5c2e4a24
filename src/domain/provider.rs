use super::profile::Profile;

/// Source of deck candidates.
///
/// The deck only ever sees the list a provider hands out, so the seed data can be
/// swapped for another source without touching the update logic.
pub trait ProfileProvider {
    fn profiles(&self) -> Vec<Profile>;
}

/// The built-in three-profile seed deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedProfiles;

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/64fedfbf-e528-4755-aa8e-ca37933d277c/files";

impl ProfileProvider for SeedProfiles {
    fn profiles(&self) -> Vec<Profile> {
        vec![
            Profile {
                id: 1,
                name: "Anna".to_string(),
                age: 25,
                bio: "I love travelling, yoga and good music. Looking for an interesting \
                      companion for city walks and shared adventures."
                    .to_string(),
                image: format!("{IMAGE_BASE}/41fe328f-53f9-4178-9421-4dc4a6c65cb4.jpg"),
                verified: true,
                interests: strings(&["Travel", "Yoga", "Music", "Photography"]),
                distance_km: 2,
            },
            Profile {
                id: 2,
                name: "Maksim".to_string(),
                age: 28,
                bio: "Developer and outdoor enthusiast. In my free time I go rock climbing \
                      and cook new dishes."
                    .to_string(),
                image: format!("{IMAGE_BASE}/14532c1e-f014-47d7-8035-8b9485782542.jpg"),
                verified: true,
                interests: strings(&["Sports", "Cooking", "Technology", "Movies"]),
                distance_km: 5,
            },
            Profile {
                id: 3,
                name: "Elena".to_string(),
                age: 23,
                bio: "Artist and dreamer. I adore coffee, books and long talks about life. \
                      Looking for someone to share my passions."
                    .to_string(),
                image: format!("{IMAGE_BASE}/c753f3e8-6aab-4ef2-956e-b491ecfe7e71.jpg"),
                verified: false,
                interests: strings(&["Art", "Literature", "Coffee", "Walks"]),
                distance_km: 3,
            },
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Provider over an arbitrary, already-built list.
#[derive(Debug, Clone, Default)]
pub struct StaticProfiles(pub Vec<Profile>);

impl ProfileProvider for StaticProfiles {
    fn profiles(&self) -> Vec<Profile> {
        self.0.clone()
    }
}
