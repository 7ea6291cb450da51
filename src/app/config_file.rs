//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/listedit/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Variant;
use crate::error::{ListeditError, Result};
use crate::render::ColorsConfig;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// UI display settings
    pub ui: UiConfig,
    /// Theme colors
    pub colors: ColorsConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Editor layout: "modal" or "classic"
    pub variant: Variant,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            variant: Variant::Modal,
        }
    }
}

/// UI display settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Heading shown above the input
    pub title: String,
    /// Prefix rows with their number
    pub show_numbers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "My Todo List".to_string(),
            show_numbers: false,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/listedit)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("listedit"))
    }

    /// Get the config file path (~/.config/listedit/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ListeditError::config(path, e.message()))
    }
}
