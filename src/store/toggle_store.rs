//! Enabled/disabled state for discovered units
//!
//! The store maps unit ids to a single enabled flag. Ids are registered once
//! when the icon catalog is scanned and are never removed afterwards; user
//! interaction and imports only flip flags. Iteration order is the
//! lexicographic id order, which keeps every derived artifact deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, TweakError};

/// A unit id paired with its current enabled flag
///
/// Returned by [`ToggleStore::entries`] for shells that render the unit grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEntry {
    /// Unit id (the icon filename stem)
    pub id: String,
    /// Whether the unit is currently allowed in-game
    pub enabled: bool,
}

/// In-memory toggle state for every discovered unit
///
/// Every registered unit starts enabled. The store never forgets a unit:
/// rescans may add ids, but existing flags are preserved and entries are
/// only ever flipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleStore {
    states: BTreeMap<String, bool>,
}

impl ToggleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with all of the given ids registered as enabled
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for id in ids {
            store.register(id);
        }
        store
    }

    /// Register a unit id, defaulting it to enabled
    ///
    /// Registering an id that is already present is a no-op, so a rescan
    /// can never reset a flag the user has already flipped.
    pub fn register(&mut self, id: impl Into<String>) {
        self.states.entry(id.into()).or_insert(true);
    }

    /// Flip the flag for `id` and return the new value
    ///
    /// # Errors
    ///
    /// Returns [`TweakError::UnknownUnit`] if the id was never registered.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        match self.states.get_mut(id) {
            Some(enabled) => {
                *enabled = !*enabled;
                Ok(*enabled)
            }
            None => Err(TweakError::UnknownUnit(id.to_string())),
        }
    }

    /// Current flag for `id`, or `None` if the id is not registered
    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.states.get(id).copied()
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the store has no registered units
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Ids of all currently disabled units, in lexicographic order
    pub fn disabled_ids(&self) -> BTreeSet<String> {
        self.states
            .iter()
            .filter(|&(_, &enabled)| !enabled)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Overwrite every flag from a disabled-id set
    ///
    /// Registered ids in the set become disabled, all others become enabled.
    /// Ids in the set that were never registered are ignored; the set never
    /// adds units.
    pub fn apply_disabled_set(&mut self, disabled: &BTreeSet<String>) {
        for (id, enabled) in &mut self.states {
            *enabled = !disabled.contains(id);
        }
    }

    /// Detached copy of the full id-to-flag map
    pub fn snapshot(&self) -> BTreeMap<String, bool> {
        self.states.clone()
    }

    /// All entries in lexicographic id order
    pub fn entries(&self) -> Vec<ToggleEntry> {
        self.states
            .iter()
            .map(|(id, &enabled)| ToggleEntry {
                id: id.clone(),
                enabled,
            })
            .collect()
    }
}
