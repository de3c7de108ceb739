//! Lobby command encoding
//!
//! Wraps ConfigText in the `!bset tweakunits <base64>` chat command used to
//! apply unit restrictions in a game lobby. Trailing `=` padding is stripped
//! on encode because lobby chat mangles it; decode restores the padding
//! before handing the payload to the base64 engine.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};

use crate::error::DecodeError;

/// Chat prefix that applies a tweakunits blob in the lobby
pub const COMMAND_MARKER: &str = "!bset tweakunits ";

/// Wrap `config_text` in a paste-ready lobby command
///
/// The output never contains `=` padding and always starts with
/// [`COMMAND_MARKER`].
pub fn encode(config_text: &str) -> String {
    let payload = STANDARD_NO_PAD.encode(config_text.as_bytes());
    format!("{COMMAND_MARKER}{payload}")
}

/// Recover ConfigText from a pasted lobby command
///
/// Accepts the full command or just its base64 payload: surrounding
/// whitespace is trimmed, the marker is stripped when present, and `=`
/// padding is restored to the next multiple of four before decoding.
///
/// # Errors
///
/// Returns [`DecodeError`] if the payload is not valid base64 (including
/// payloads one character short of a full block, which no padding can fix)
/// or the decoded bytes are not valid UTF-8.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    let trimmed = input.trim();
    let payload = trimmed
        .strip_prefix(COMMAND_MARKER.trim_end())
        .unwrap_or(trimmed)
        .trim();

    let mut padded = payload.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }

    let bytes = STANDARD.decode(padded.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
