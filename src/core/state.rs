pub mod deck;
pub mod editor;
pub mod filter;
pub mod system;
pub mod toast;
pub mod ui;

use crate::{
    domain::{FilterSettings, Profile, ProfileProvider, SeedProfiles, UserProfile},
    infrastructure::config::Config,
};

use deck::{DeckSettings, DeckState};
use editor::EditorState;
use filter::FilterState;
use system::SystemState;
use toast::ToastState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub deck: DeckState,
    pub ui: UiState,
    pub filter: FilterState,
    pub editor: EditorState,
    pub toasts: ToastState,
    pub system: SystemState,
    pub config: ConfigState,
    /// Every profile the provider handed out, before any filtering
    pub catalog: Vec<Profile>,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&SeedProfiles)
    }
}

impl AppState {
    /// Initialize AppState from a profile source with the default config
    pub fn new(provider: &dyn ProfileProvider) -> Self {
        Self::new_with_config(provider, Config::default())
    }

    /// Initialize AppState from a profile source and config
    pub fn new_with_config(provider: &dyn ProfileProvider, config: Config) -> Self {
        let catalog = provider.profiles();
        let applied = FilterSettings::default();
        let deck_profiles = if config.deck.apply_filters {
            filter_profiles(&catalog, &applied)
        } else {
            catalog.clone()
        };
        let deck_settings = DeckSettings {
            swipe_delay_ms: config.deck.swipe_delay_ms,
            like_toast_ms: config.toast.like_duration_ms,
            deck_end_toast_ms: config.toast.deck_end_duration_ms,
        };

        Self {
            deck: DeckState::new(deck_profiles, deck_settings),
            ui: UiState::default(),
            filter: FilterState::new(applied, config.toast.default_duration_ms),
            editor: EditorState::new(UserProfile::default()),
            toasts: ToastState::new(config.toast.limit),
            system: SystemState::default(),
            catalog,
            config: ConfigState { config },
        }
    }

    /// Profile under the deck cursor
    pub fn current_profile(&self) -> Option<&Profile> {
        self.deck.current()
    }

    /// Catalog narrowed by the applied filters
    pub fn filtered_catalog(&self) -> Vec<Profile> {
        filter_profiles(&self.catalog, self.filter.applied())
    }

    /// Whether applying filters rebuilds the deck
    pub fn filters_narrow_deck(&self) -> bool {
        self.config.config.deck.apply_filters
    }
}

fn filter_profiles(profiles: &[Profile], settings: &FilterSettings) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|p| settings.matches(p))
        .cloned()
        .collect()
}
