//! Settings management
//!
//! Reads settings from `config.toml` in the config directory. Settings
//! cover where the map file and play log live, the default lobby size and
//! short-list length, and output preferences.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file
    #[error("Failed to access config file '{path}': {error}")]
    IoError { path: String, error: String },

    /// Failed to parse the settings file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Settings for mode_rotation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Data file locations
    #[serde(default)]
    pub files: FilesConfig,

    /// Rotation defaults
    #[serde(default)]
    pub rotation: RotationConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputSettings,
}

/// Data file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Path of the map catalog
    pub maps: Option<PathBuf>,

    /// Path of the play log
    pub log: Option<PathBuf>,
}

/// Rotation defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Lobby size at startup
    pub players: Option<u16>,

    /// Maps offered per round
    pub choices: Option<usize>,
}

/// Output preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    pub color: Option<bool>,
}

impl Settings {
    /// Load settings from a specific path
    ///
    /// A missing file yields the defaults; an invalid one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::IoError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective map catalog path
    #[must_use]
    pub fn maps_path(&self) -> PathBuf {
        self.files
            .maps
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::config::defaults::MAP_FILE))
    }

    /// Effective play log path
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.files
            .log
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::config::defaults::PLAY_LOG_FILE))
    }

    /// Effective lobby size
    #[must_use]
    pub fn players(&self) -> u16 {
        self.rotation
            .players
            .unwrap_or(crate::core::rotation::DEFAULT_PLAYERS)
    }

    /// Effective short-list length
    #[must_use]
    pub fn choices(&self) -> usize {
        self.rotation
            .choices
            .unwrap_or(crate::core::selection::DEFAULT_CHOICES)
    }
}
