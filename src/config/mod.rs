//! Settings management module
//!
//! This module handles loading, saving, and managing persisted tool
//! settings. Settings are stored in the platform config directory under
//! `tweakunits/settings.json` with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::SettingsManager;
pub use models::{GridPreferences, Settings, WindowState};
