//! ConfigText and lobby-command codecs
//!
//! Two layers sit between the toggle store and the game:
//!
//! - [`lua`] renders the disabled-unit set as the Lua table fragment the
//!   `tweakunits` modoption expects, and leniently parses it back.
//! - [`command`] wraps that text in the base64 `!bset tweakunits` chat
//!   command, stripping the `=` padding that lobby chat mangles.
//!
//! Both layers are pure string transforms; file IO lives in the session.

pub mod command;
pub mod lua;

pub use command::COMMAND_MARKER;
