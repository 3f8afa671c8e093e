//! Settings file I/O

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::config::settings as settings_config;
use crate::error::EcloudError;

use super::models::SettingsFile;

/// Handles reading the settings file
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Create a store using the default path (~/.ecloudctl/config.json)
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a store with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load settings from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<SettingsFile, EcloudError> {
        if !self.path.exists() {
            debug!("No settings file at {}", self.path.display());
            return Ok(SettingsFile::default());
        }

        debug!("Loading settings from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|e| {
            EcloudError::Config(format!(
                "Failed to read settings file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            EcloudError::Config(format!(
                "Failed to parse settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
