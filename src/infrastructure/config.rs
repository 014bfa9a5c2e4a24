use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Deck behaviour
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    /// Length of the swipe transition before the cursor advances
    #[serde(default = "DeckConfig::default_swipe_delay_ms")]
    pub swipe_delay_ms: u64,
    /// Rebuild the deck from the applied filters
    #[serde(default)]
    pub apply_filters: bool,
}

impl DeckConfig {
    fn default_swipe_delay_ms() -> u64 {
        300
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_delay_ms: Self::default_swipe_delay_ms(),
            apply_filters: false,
        }
    }
}

/// Toast surface behaviour
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToastConfig {
    /// Toasts shown at once; newer ones push out older ones
    pub limit: usize,
    pub like_duration_ms: u64,
    pub deck_end_duration_ms: u64,
    pub default_duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            limit: 1,
            like_duration_ms: 2000,
            deck_end_duration_ms: 3000,
            default_duration_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

impl Config {
    /// Built-in defaults shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Defaults layered with the optional user config files in the config directory
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("loading config from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// Fill keybindings and styles the user did not override
    fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
    }
}
