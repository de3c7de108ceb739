//! ConfigText rendering and parsing
//!
//! ConfigText is the Lua table fragment understood by the game's
//! `tweakunits` modoption: one `maxThisUnit = 0` entry per disabled unit,
//! wrapped in braces. Enabled units are never written; absence means
//! enabled.

use std::collections::BTreeSet;

use crate::store::ToggleStore;

/// Suffix appended to a disabled unit's id when rendering an entry line
const DISABLED_SUFFIX: &str = " = { maxThisUnit = 0 },";

/// Substring that marks a line as a disabled-unit entry when parsing
const DISABLED_NEEDLE: &str = "= { maxThisUnit = 0 }";

/// Render the disabled units of `store` as ConfigText
///
/// Entries appear in lexicographic id order, so equal stores always produce
/// byte-identical output. A store with nothing disabled renders as an empty
/// table.
pub fn encode(store: &ToggleStore) -> String {
    let mut text = String::from("{\n");
    for id in store.disabled_ids() {
        text.push_str("  ");
        text.push_str(&id);
        text.push_str(DISABLED_SUFFIX);
        text.push('\n');
    }
    text.push_str("}\n");
    text
}

/// Extract the disabled-unit ids from ConfigText
///
/// The scan is line-based and lenient: lines are trimmed, one trailing comma
/// is dropped, and anything that does not contain a `maxThisUnit = 0` entry
/// is ignored without error. The id is everything before the first `=`,
/// trimmed; lines with an empty id are skipped.
pub fn parse(text: &str) -> BTreeSet<String> {
    let mut disabled = BTreeSet::new();

    for line in text.lines() {
        let mut line = line.trim();
        if let Some(stripped) = line.strip_suffix(',') {
            line = stripped.trim_end();
        }
        if !line.contains(DISABLED_NEEDLE) {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() {
                disabled.insert(id.to_string());
            }
        }
    }

    disabled
}
