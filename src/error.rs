//! Error types for the `tweakunits` library
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Errors produced while decoding a pasted tweak command
///
/// Covers both failure points of [`crate::codec::command::decode`]: the
/// base64 payload itself and the UTF-8 validation of the decoded bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Main error type for the `tweakunits` library
#[derive(Debug, Error)]
pub enum TweakError {
    /// A toggle was requested for a unit id that is not in the store
    #[error("unknown unit id: {0}")]
    UnknownUnit(String),

    /// An imported command could not be decoded
    #[error("failed to decode tweak command: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("configuration error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `tweakunits` operations
pub type Result<T> = std::result::Result<T, TweakError>;

/// Convert an error to a user-friendly message
///
/// Takes a [`TweakError`] and returns a message suitable for displaying to
/// end users in the shell's error dialogs.
pub fn user_message(error: &TweakError) -> String {
    match error {
        TweakError::UnknownUnit(id) => {
            format!(
                "Unknown unit: {id}\n\n\
                 The unit is not part of the loaded icon set.\n\
                 Rescan the icon folder and try again."
            )
        }
        TweakError::Decode(e) => {
            format!(
                "The pasted command could not be decoded:\n\n{e}\n\n\
                 Make sure you copied the whole command, including the\n\
                 '!bset tweakunits' prefix, without edits."
            )
        }
        TweakError::Config(_) => "Failed to load or save settings.\n\n\
             Your preferences may not persist.\n\
             Check that you have write permissions to the settings folder."
            .to_string(),
        TweakError::Io(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        TweakError::Json(e) => {
            format!(
                "Settings file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
