//! Unit icon catalog module
//!
//! Discovers the set of toggleable units by scanning an icon folder. Ids
//! are icon filename stems, matching what the game's unit definitions use.

pub mod scanner;

pub use scanner::{UnitIcon, scan_units};
