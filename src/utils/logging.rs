//! Logging system initialization
//!
//! Sets up tracing-based logging with daily-rotated file output in the
//! platform data directory, keeping one week of history. Shells call
//! [`init_logging`] once at startup; the library itself only emits events.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Result, StringError, TweakError};

/// Number of rotated log files to keep
const MAX_LOG_FILES: usize = 7;

/// Directory log files are written to
///
/// # Errors
///
/// Returns [`TweakError::Config`] if the platform reports no data
/// directory.
pub fn log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        TweakError::Config(StringError::new("could not determine data directory"))
    })?;
    Ok(data_dir.join("tweakunits"))
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Output goes to `tweakunits.<date>.log` files,
/// rotated daily with the last [`MAX_LOG_FILES`] kept.
///
/// # Errors
///
/// Returns [`TweakError::Config`] if the appender cannot be built or a
/// global subscriber is already installed, and [`TweakError::Io`] if the
/// log directory cannot be created.
pub fn init_logging() -> Result<()> {
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("tweakunits")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| TweakError::Config(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TweakError::Config(Box::new(e)))?;

    tracing::info!("tweakunits v{} logging initialized", env!("CARGO_PKG_VERSION"));

    Ok(())
}
