//! Toggle state management module
//!
//! This module owns the in-memory id-to-flag map that every other part of
//! the crate reads from or writes to. Units default to enabled and are
//! never removed, only flipped.

pub mod toggle_store;

pub use toggle_store::{ToggleEntry, ToggleStore};
