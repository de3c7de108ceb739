//! Utility modules
//!
//! Provides logging initialization for embedding shells.

pub mod logging;

pub use logging::init_logging;
