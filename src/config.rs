//! Engine configuration loading.

use crate::model::Language;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Engine configuration.
///
/// Everything has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Language used when a recipient has no stored preference.
    #[serde(default)]
    pub default_language: Language,
    /// Upper bound accepted by VOUCH_LEVEL.
    #[serde(default = "default_max_vouch_level")]
    pub max_vouch_level: u32,
    /// Disappearing-message duration applied to new channels, in seconds.
    #[serde(default = "default_message_expiry_secs")]
    pub default_message_expiry_secs: u64,
}

fn default_max_vouch_level() -> u32 {
    10
}

fn default_message_expiry_secs() -> u64 {
    // one week
    60 * 60 * 24 * 7
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            max_vouch_level: default_max_vouch_level(),
            default_message_expiry_secs: default_message_expiry_secs(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_message_expiry(&self) -> Duration {
        Duration::from_secs(self.default_message_expiry_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_vouch_level < 1 {
            return Err(ConfigError::Invalid(
                "max_vouch_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
