//! Integration tests for `tweakunits`
//!
//! Tests the full tool lifecycle: icon discovery, toggling, export to the
//! restriction files, and re-import through both the Lua file and the
//! pasted lobby command.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tweakunits::catalog::scan_units;
use tweakunits::codec::COMMAND_MARKER;
use tweakunits::config::{Settings, SettingsManager};
use tweakunits::error::{TweakError, user_message};
use tweakunits::session::TweakSession;

/// Lay out a small icon tree like the game's unitpng folder
fn create_icon_tree(root: &Path) {
    for rel in [
        "armada/armcom.png",
        "armada/armflea.png",
        "cortex/corak.png",
        "cortex/bots/corroach.png",
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"png").unwrap();
    }
}

/// Scan a fresh icon tree and start a session exporting into the same tempdir
fn start_session(temp_dir: &TempDir) -> TweakSession {
    let units_dir = temp_dir.path().join("unitpng");
    create_icon_tree(&units_dir);
    let icons = scan_units(&units_dir).unwrap();
    TweakSession::new(&icons, temp_dir.path().join("tweak_output"))
}

/// Test the full cycle: scan, toggle, export, verify files, re-import
#[test]
fn test_full_session_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);

    assert_eq!(session.store().len(), 4);
    assert!(session.store().disabled_ids().is_empty());

    session.toggle_unit("armflea").unwrap();
    session.toggle_unit("corroach").unwrap();

    let artifacts = session.export("restrictions").unwrap();

    // The .lua file holds the ConfigText exactly
    let lua_on_disk = fs::read_to_string(&artifacts.lua_path).unwrap();
    assert_eq!(lua_on_disk, artifacts.config_text);
    assert_eq!(
        lua_on_disk,
        "{\n  armflea = { maxThisUnit = 0 },\n  corroach = { maxThisUnit = 0 },\n}\n"
    );

    // The .txt file holds the command plus a trailing newline
    let txt_on_disk = fs::read_to_string(&artifacts.command_path).unwrap();
    assert_eq!(txt_on_disk, format!("{}\n", artifacts.command));
    assert!(artifacts.command.starts_with(COMMAND_MARKER));
    assert!(!artifacts.command.contains('='));

    // A fresh session with its own toggles converges after import
    let mut other = start_session(&temp_dir);
    other.toggle_unit("armcom").unwrap();
    other.import_file(&artifacts.lua_path).unwrap();

    assert_eq!(other.snapshot(), session.snapshot());
}

/// Test that a pasted lobby command round-trips between sessions
#[test]
fn test_pasted_command_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);
    session.toggle_unit("corak").unwrap();
    let artifacts = session.export("output").unwrap();

    // Paste the .txt file content verbatim, trailing newline included
    let pasted = fs::read_to_string(&artifacts.command_path).unwrap();

    let mut other = start_session(&temp_dir);
    let disabled = other.import_text(&pasted).unwrap();

    assert_eq!(disabled.len(), 1);
    assert!(disabled.contains("corak"));
    assert_eq!(other.snapshot(), session.snapshot());
}

/// Test that import replaces the whole disabled set, not just adds to it
#[test]
fn test_import_overwrites_existing_toggles() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);
    session.toggle_unit("armcom").unwrap();
    session.toggle_unit("armflea").unwrap();

    session
        .import_text("{\n  corak = { maxThisUnit = 0 },\n}\n")
        .unwrap();

    assert_eq!(session.store().is_enabled("armcom"), Some(true));
    assert_eq!(session.store().is_enabled("armflea"), Some(true));
    assert_eq!(session.store().is_enabled("corak"), Some(false));
}

/// Test that a hand-edited Lua file imports leniently
#[test]
fn test_hand_edited_lua_import() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);

    let lua_path = temp_dir.path().join("edited.lua");
    fs::write(
        &lua_path,
        "-- tournament restrictions\n\
         {\n\
         \x20 armflea = { maxThisUnit = 0 },\n\
         \x20 typo_line_without_entry\n\
         \x20 ghost = { maxThisUnit = 0 }\n\
         }\n",
    )
    .unwrap();

    let disabled = session.import_file(&lua_path).unwrap();

    // ghost parses but is not a known unit, so only armflea flips
    assert!(disabled.contains("ghost"));
    assert_eq!(session.store().disabled_ids().len(), 1);
    assert_eq!(session.store().is_enabled("armflea"), Some(false));
}

/// Test that a corrupt pasted command fails without touching the store
#[test]
fn test_corrupt_command_rejected_without_side_effects() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);
    session.toggle_unit("corak").unwrap();
    let before = session.snapshot();

    let result = session.import_text("!bset tweakunits %%%not-base64%%%");

    assert!(matches!(result, Err(TweakError::Decode(_))));
    assert_eq!(session.snapshot(), before);
}

/// Test that unknown-unit toggles surface a usable error message
#[test]
fn test_unknown_unit_error_message() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);

    let err = session.toggle_unit("ghost").unwrap_err();
    assert!(matches!(err, TweakError::UnknownUnit(ref id) if id == "ghost"));

    let message = user_message(&err);
    assert!(message.contains("Unknown unit: ghost"));
}

/// Test settings persistence across save and load
#[test]
fn test_settings_persistence_integration() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");

    let mut settings = Settings {
        export_name: "clanwar".to_string(),
        ..Settings::default()
    };
    settings.window_state.width = 1280;
    SettingsManager::save_to(&path, &settings).unwrap();

    let loaded = SettingsManager::load_from(&path).unwrap();
    assert_eq!(loaded.export_name, "clanwar");
    assert_eq!(loaded.window_state.width, 1280);

    // Corrupt file falls back to defaults instead of failing startup
    fs::write(&path, "not json at all").unwrap();
    let fallback = SettingsManager::load_from(&path).unwrap();
    assert_eq!(fallback.export_name, "output");
}

/// Test that the settings defaults drive a working export
#[test]
fn test_settings_defaults_drive_export() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::default();

    let units_dir = temp_dir.path().join(&settings.units_dir);
    create_icon_tree(&units_dir);
    let icons = scan_units(&units_dir).unwrap();
    let session = TweakSession::new(&icons, temp_dir.path().join(&settings.output_dir));

    let artifacts = session.export(&settings.export_name).unwrap();
    assert!(artifacts.lua_path.ends_with("output.lua"));
    assert!(artifacts.command_path.ends_with("output.txt"));
    assert!(artifacts.lua_path.starts_with(temp_dir.path().join("tweak_output")));
}

/// Test that grid entries reflect scan order ids and toggle state
#[test]
fn test_entries_reflect_catalog_and_toggles() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = start_session(&temp_dir);
    session.toggle_unit("armcom").unwrap();

    let entries = session.entries();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();

    // Entries come back in id order regardless of scan order
    assert_eq!(ids, vec!["armcom", "armflea", "corak", "corroach"]);
    assert!(!entries[0].enabled);
    assert!(entries[1].enabled);
}
