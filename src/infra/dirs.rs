//! Platform-specific directory management
//!
//! Provides the platform-specific config directory. Follows the XDG Base
//! Directory Specification on Linux and standard locations on macOS and
//! Windows.
//!
//! The `MODE_ROTATION_CONFIG_DIR` environment variable overrides the default.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::CONFIG_FILE;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "MODE_ROTATION_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "mode_rotation";

/// Platform-specific directory provider
#[derive(Debug, Clone)]
pub struct RotationDirs {
    config_dir: PathBuf,
}

impl RotationDirs {
    /// Create a new `RotationDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Get the settings file path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/mode_rotation/config.toml` or `~/.config/mode_rotation/config.toml`
    /// - macOS: `~/Library/Application Support/mode_rotation/config.toml`
    /// - Windows: `%APPDATA%\mode_rotation\config.toml`
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for RotationDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_names_settings_file() {
        let dirs = RotationDirs::new();
        assert!(dirs.config_path().ends_with("config.toml"));
        assert!(dirs.config_path().parent().is_some());
    }
}
