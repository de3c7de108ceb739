//! Tweak session implementation
//!
//! The session owns the toggle store for one run of the tool and exposes
//! the operations a shell wires its widgets to: toggling units, exporting
//! the restriction files, and importing a previous export.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::UnitIcon;
use crate::codec::{COMMAND_MARKER, command, lua};
use crate::error::Result;
use crate::store::{ToggleEntry, ToggleStore};

/// Base name used for exported files when the user leaves the name blank
pub const DEFAULT_EXPORT_NAME: &str = "output";

/// Files and strings produced by a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifacts {
    /// The rendered ConfigText
    pub config_text: String,
    /// The paste-ready lobby command
    pub command: String,
    /// Path of the written `.lua` file
    pub lua_path: PathBuf,
    /// Path of the written `.txt` file
    pub command_path: PathBuf,
}

/// One run of the tool: the toggle store plus the export folder
///
/// All methods are synchronous and take `&mut self` where they mutate;
/// shells drive the session from their event callbacks.
#[derive(Debug)]
pub struct TweakSession {
    store: ToggleStore,
    output_dir: PathBuf,
}

impl TweakSession {
    /// Create a session with every unit from `icons` registered as enabled
    pub fn new(icons: &[UnitIcon], output_dir: impl Into<PathBuf>) -> Self {
        use tracing::info;

        let mut store = ToggleStore::new();
        for icon in icons {
            store.register(icon.id.as_str());
        }
        let output_dir = output_dir.into();

        info!(
            "Session started with {} unit(s), exporting to {}",
            store.len(),
            output_dir.display()
        );
        Self { store, output_dir }
    }

    /// Flip one unit and return its new enabled flag
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TweakError::UnknownUnit`] for ids that were
    /// never registered.
    pub fn toggle_unit(&mut self, id: &str) -> Result<bool> {
        use tracing::info;

        let enabled = self.store.toggle(id)?;
        info!(
            "Toggled {}: now {}",
            id,
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(enabled)
    }

    /// Render the current state and write `<name>.lua` and `<name>.txt`
    ///
    /// A blank `name` falls back to [`DEFAULT_EXPORT_NAME`]. The `.lua` file
    /// holds the ConfigText, the `.txt` file the lobby command followed by a
    /// newline. The export folder is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TweakError::Io`] if the folder or either file
    /// cannot be written.
    pub fn export(&self, name: &str) -> Result<ExportArtifacts> {
        use tracing::info;

        let base_name = name.trim();
        let base_name = if base_name.is_empty() {
            DEFAULT_EXPORT_NAME
        } else {
            base_name
        };

        let config_text = lua::encode(&self.store);
        let command = command::encode(&config_text);

        fs::create_dir_all(&self.output_dir)?;
        let lua_path = self.output_dir.join(format!("{base_name}.lua"));
        let command_path = self.output_dir.join(format!("{base_name}.txt"));

        fs::write(&lua_path, &config_text)?;
        info!("Wrote {}", lua_path.display());
        fs::write(&command_path, format!("{command}\n"))?;
        info!("Wrote {}", command_path.display());

        Ok(ExportArtifacts {
            config_text,
            command,
            lua_path,
            command_path,
        })
    }

    /// Apply a previous export to the store and return the disabled set
    ///
    /// Accepts either raw ConfigText or a full lobby command, which is
    /// decoded first. The parsed disabled set replaces the current one in
    /// full: registered ids in the set become disabled, every other unit
    /// becomes enabled, unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TweakError::Decode`] if a pasted command
    /// cannot be decoded; the store is left untouched in that case.
    pub fn import_text(&mut self, contents: &str) -> Result<BTreeSet<String>> {
        use tracing::{info, warn};

        let config_text = if contents.trim_start().starts_with(COMMAND_MARKER.trim_end()) {
            command::decode(contents)?
        } else {
            contents.to_string()
        };

        let disabled = lua::parse(&config_text);
        let unknown_count = disabled
            .iter()
            .filter(|id| !self.store.contains(id))
            .count();
        if unknown_count > 0 {
            warn!(
                "Import references {} unknown unit id(s); they will be ignored",
                unknown_count
            );
        }

        self.store.apply_disabled_set(&disabled);
        info!("Imported {} disabled unit(s)", disabled.len());
        Ok(disabled)
    }

    /// Read a file and apply it like [`TweakSession::import_text`]
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TweakError::Io`] if the file cannot be read,
    /// plus everything `import_text` can return.
    pub fn import_file(&mut self, path: &Path) -> Result<BTreeSet<String>> {
        use tracing::info;

        info!("Importing restrictions from {}", path.display());
        let contents = fs::read_to_string(path)?;
        self.import_text(&contents)
    }

    /// Read-only view of the toggle store
    pub fn store(&self) -> &ToggleStore {
        &self.store
    }

    /// All entries in id order, for rendering the unit grid
    pub fn entries(&self) -> Vec<ToggleEntry> {
        self.store.entries()
    }

    /// Detached copy of the full id-to-flag map
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.store.snapshot()
    }

    /// Folder exports are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
