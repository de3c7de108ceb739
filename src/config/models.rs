//! Settings data models
//!
//! This module defines the data structures for persisted tool settings.
//! Toggle state is deliberately not part of them: restrictions live for one
//! session and travel through exports, never through the settings file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Folder scanned for unit icons
    pub units_dir: PathBuf,
    /// Folder exports are written to
    pub output_dir: PathBuf,
    /// Base name prefilled in the export name input
    pub export_name: String,
    /// Unit grid preferences
    pub grid: GridPreferences,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// Unit grid layout preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridPreferences {
    /// Number of icons per row
    pub columns: u32,
    /// Icon edge length in pixels
    pub thumb_size: u32,
}

/// Window state for position and size persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    /// X position
    pub x: i32,
    /// Y position
    pub y: i32,
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units_dir: PathBuf::from("unitpng"),
            output_dir: PathBuf::from("tweak_output"),
            export_name: "output".to_string(),
            grid: GridPreferences::default(),
            window_state: WindowState::default(),
        }
    }
}

impl Default for GridPreferences {
    fn default() -> Self {
        Self {
            columns: 9,
            thumb_size: 64,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 960,
            height: 540,
        }
    }
}
