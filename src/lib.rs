//! `tweakunits` - unit restriction core for Beyond All Reason lobbies
//!
//! Tracks an enabled/disabled flag per game unit and turns the disabled set
//! into the `tweakunits` modoption artifacts: a Lua restriction table and
//! the base64 `!bset tweakunits` chat command. The crate is the synchronous,
//! single-threaded core of a desktop tool; the GUI shell that renders the
//! unit grid lives outside and drives a [`session::TweakSession`] from its
//! callbacks.
//!
//! # Typical flow
//!
//! 1. [`catalog::scan_units`] discovers units from an icon folder.
//! 2. [`session::TweakSession::new`] registers them, all enabled.
//! 3. Clicks map to [`session::TweakSession::toggle_unit`].
//! 4. [`session::TweakSession::export`] writes `<name>.lua` and
//!    `<name>.txt`; [`session::TweakSession::import_text`] applies a
//!    previous export or a pasted command.

// Module declarations
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{DecodeError, Result, TweakError};
pub use session::TweakSession;
pub use store::ToggleStore;
