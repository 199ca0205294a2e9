//! Strict decoding of UTF-8 bytes into Unicode code points.
//!
//! Malformed input is never replaced or skipped over. Each failure is reported
//! as a [`DecodeError`] describing exactly why the bytes were rejected, and the
//! caller decides how to proceed.

pub mod decode;
pub mod error;
pub mod print;
pub mod runes;
pub(crate) mod utils;

#[cfg(test)]
mod test_data;

pub use decode::decode_rune;
pub use error::{DecodeError, SequenceError, Utf8RuneError};
pub use print::{format_rune, RunePrintOptions};
pub use runes::{decode_string, runes, validate, Runes};
pub use utils::inspect_bytes;
