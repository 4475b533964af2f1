//! Client configuration.
//!
//! Settings live in `~/.config/snoozectl/config.toml` by default. Every
//! field is optional:
//!
//! ```toml
//! [snooze]
//! options = [15, 30, 60, 120]
//! default = 60
//! max_options = 4
//! override = "default=30,options_array=10:30:60"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snoozectl_core::{
    DEFAULT_SNOOZE_DEFAULT, DEFAULT_SNOOZE_MINUTES, SnoozeConfigResolver, SnoozeDefaults,
};

/// Configuration for the snoozectl client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Snooze option settings.
    #[serde(default)]
    pub snooze: SnoozeSettings,
}

/// Compiled-in snooze defaults and an optional stored override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnoozeSettings {
    /// Options offered when no usable override is set.
    pub options: Vec<u32>,

    /// Pre-selected option when no usable override is set.
    pub default: u32,

    /// Maximum number of options shown.
    pub max_options: Option<usize>,

    /// Stored override string, used when none is given on the command line.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_value: Option<String>,
}

impl Default for SnoozeSettings {
    fn default() -> Self {
        Self {
            options: DEFAULT_SNOOZE_MINUTES.to_vec(),
            default: DEFAULT_SNOOZE_DEFAULT,
            max_options: None,
            override_value: None,
        }
    }
}

impl SnoozeSettings {
    /// Builds a resolver from these settings.
    pub fn resolver(&self) -> Result<SnoozeConfigResolver, String> {
        let defaults = SnoozeDefaults::new(self.options.clone(), self.default)
            .map_err(|e| format!("[snooze] options: {}", e))?;
        let resolver = SnoozeConfigResolver::new(defaults);
        Ok(match self.max_options {
            Some(max) => resolver.with_max_options(max),
            None => resolver,
        })
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snoozectl")
    }
}
