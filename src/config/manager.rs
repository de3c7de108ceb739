//! Settings manager for loading and saving tool settings
//!
//! Settings live in `<config_dir>/tweakunits/settings.json` and are written
//! atomically to prevent corruption.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::models::Settings;
use crate::error::{Result, StringError, TweakError};

/// Settings manager
pub struct SettingsManager;

impl SettingsManager {
    /// Path to the settings file in the platform config directory
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::Config`] if the platform reports no config
    /// directory at all.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TweakError::Config(StringError::new("could not determine config directory"))
        })?;
        Ok(config_dir.join("tweakunits").join("settings.json"))
    }

    /// Load settings from the default location
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::Config`] if the default path cannot be
    /// resolved, or [`TweakError::Io`] if an existing file cannot be read.
    pub fn load() -> Result<Settings> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load settings from a specific path
    ///
    /// A missing file and unparseable content both fall back to defaults;
    /// the latter logs a warning rather than failing the shell at startup.
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::Io`] if an existing file cannot be read.
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            info!("Settings file not found, using defaults");
            return Ok(Settings::default());
        }

        let json = fs::read_to_string(path)?;
        match serde_json::from_str(&json) {
            Ok(settings) => {
                info!("Settings loaded from {}", path.display());
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to parse settings, using defaults: {}", e);
                Ok(Settings::default())
            }
        }
    }

    /// Save settings to the default location
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::Config`] if the default path cannot be
    /// resolved, plus everything [`SettingsManager::save_to`] can return.
    pub fn save(settings: &Settings) -> Result<()> {
        Self::save_to(&Self::default_path()?, settings)
    }

    /// Save settings to a specific path with an atomic write
    ///
    /// Serializes into a temporary file in the target directory and
    /// persists it over the destination, so a crash can never leave a
    /// half-written settings file behind.
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::Io`] if the directory or file cannot be
    /// written, or [`TweakError::Json`] if serialization fails.
    pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
        let dir = path.parent().ok_or_else(|| {
            TweakError::Config(StringError::new("settings path has no parent directory"))
        })?;
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(settings)?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path).map_err(|e| TweakError::Io(e.error))?;

        info!("Settings saved to {}", path.display());
        Ok(())
    }
}
