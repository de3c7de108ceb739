//! Session module
//!
//! This module coordinates the toggle store, the codecs, and the export
//! folder behind the interface a GUI shell drives.
//!
//! # Event flow
//!
//! ```text
//! shell callback → TweakSession → ToggleStore
//!                        ↓
//!            lua/command codecs → export files
//! ```
//!
//! A toggle click maps to [`TweakSession::toggle_unit`], the export button
//! to [`TweakSession::export`], and the import dialog to
//! [`TweakSession::import_file`] or [`TweakSession::import_text`] for
//! pasted commands. Everything is synchronous; the session never spawns
//! threads or watches the filesystem.

pub mod tweak_session;

pub use tweak_session::{DEFAULT_EXPORT_NAME, ExportArtifacts, TweakSession};
