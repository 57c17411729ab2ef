// Settings store - persists and loads user settings as JSON

use crate::system_dict::SystemDictKind;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Application directory inside the user's config directory
const APP_DIR: &str = "sysdict";

/// Persisted user settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// System dictionary used for annotations
    pub system_dict: SystemDictKind,
}

/// Error types for settings operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// No per-user config directory on this platform
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// Settings file exists but could not be read
    #[error("Failed to load settings: {0}")]
    Load(String),
    /// Settings file is not valid settings JSON
    #[error("Failed to parse settings: {0}")]
    Parse(String),
    /// Failed to write settings
    #[error("Failed to persist settings: {0}")]
    Persist(String),
}

/// Store for user settings with file-based persistence
#[derive(Debug, Clone)]
pub struct SettingsStore {
    config_path: PathBuf,
}

impl SettingsStore {
    /// Create a new store with the given settings path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Create a store at `<config dir>/sysdict/settings.json`
    pub fn with_default_path() -> Result<Self, SettingsError> {
        let config_dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(config_dir.join(APP_DIR).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings from disk.
    ///
    /// A missing file yields default settings. Missing keys take their defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.config_path.exists() {
            crate::debug!(
                "Settings file {:?} not found, using defaults",
                self.config_path
            );
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::Load(e.to_string()))?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))?;

        crate::debug!("Loaded settings from {:?}: {:?}", self.config_path, settings);
        Ok(settings)
    }

    /// Persist settings using atomic write (temp file + rename)
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Persist(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Persist(e.to_string()))?;

        let temp_path = self.config_path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(|e| {
                SettingsError::Persist(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(content.as_bytes())
                .map_err(|e| SettingsError::Persist(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .map_err(|e| SettingsError::Persist(format!("Failed to sync: {}", e)))?;
        }

        fs::rename(&temp_path, &self.config_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SettingsError::Persist(format!("Failed to rename: {}", e))
        })?;

        crate::info!("Settings saved to {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
