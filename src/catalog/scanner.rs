//! Unit icon discovery
//!
//! Walks the icon folder recursively and derives one unit id per `*.png`
//! file (extension matched case-insensitively). The id is the filename
//! stem; the path relative to the scanned folder is kept so shells can
//! group the grid by subfolder and show tooltips.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// A discovered unit icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitIcon {
    /// Unit id derived from the icon filename stem
    pub id: String,
    /// Icon path relative to the scanned folder
    pub rel_path: PathBuf,
}

/// Recursively collect all unit icons under `dir`
///
/// Results are sorted by relative path so repeated scans of the same tree
/// produce the same order. Files that are not `.png` are ignored.
///
/// # Errors
///
/// Returns [`crate::error::TweakError::Io`] if `dir` does not exist or a
/// directory in the tree cannot be read.
pub fn scan_units(dir: &Path) -> Result<Vec<UnitIcon>> {
    let mut icons = Vec::new();
    walk(dir, dir, &mut icons)?;
    icons.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

    debug!(
        "Discovered {} unit icons under {}",
        icons.len(),
        dir.display()
    );
    Ok(icons)
}

fn walk(root: &Path, dir: &Path, icons: &mut Vec<UnitIcon>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(root, &path, icons)?;
        } else if is_png(&path) {
            if let Some(id) = unit_id(&path) {
                let rel_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
                icons.push(UnitIcon { id, rel_path });
            } else {
                warn!("Skipping icon without a usable name: {}", path.display());
            }
        }
    }
    Ok(())
}

/// Whether the path has a `.png` extension, in any letter case
fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Filename stem as the unit id, or `None` for unusable names
fn unit_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
        .filter(|id| !id.is_empty())
}
