//! Provides the [`DecodeError`] and [`SequenceError`] types that describe why
//! bytes could not be decoded as UTF-8, and the [`Utf8RuneError`] trait shared
//! by all error types in this workspace.

use owo_colors::{OwoColorize, Stream::Stderr};

use crate::utils;

/// Shared trait implemented by all error types in utf8_rune.
///
pub trait Utf8RuneError {
  /// Returns lines of text that describe an error in a human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String>;

  /// Prints details on the error to stderr. This will include all details and
  /// contextual information stored in the error.
  ///
  fn print(&self, task_description: &str) {
    eprintln!();
    eprintln!("{}", "-----".if_supports_color(Stderr, |text| text.red()));

    for line in self.to_lines(task_description) {
      eprintln!("{}", line.if_supports_color(Stderr, |text| text.red()));
    }

    eprintln!();
  }
}

/// The reason the bytes at the start of a buffer are not a valid UTF-8 encoded
/// code point.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
  /// The buffer is empty.
  EmptyInput,

  /// The buffer is shorter than the sequence length implied by its leading
  /// byte, or a continuation byte immediately follows the end of the sequence.
  InvalidLength,

  /// A byte that must have the form `10xxxxxx` does not.
  InvalidContinuationByte,

  /// The code point is encoded using more bytes than necessary.
  Overlong,

  /// The code point lies in the UTF-16 surrogate range `U+D800..=U+DFFF`.
  SurrogateHalf,

  /// The code point is greater than `U+10FFFF`.
  TooLarge,

  /// The leading byte is not a valid UTF-8 leading byte, i.e. it is a
  /// continuation byte or has the reserved `11111xxx` form.
  InvalidUtf8,
}

impl DecodeError {
  /// Returns a short human-readable description of a decode error.
  ///
  pub fn description(&self) -> &'static str {
    match self {
      DecodeError::EmptyInput => "empty input",
      DecodeError::InvalidLength => "invalid length",
      DecodeError::InvalidContinuationByte => "invalid continuation byte",
      DecodeError::Overlong => "overlong encoding",
      DecodeError::SurrogateHalf => "surrogate half",
      DecodeError::TooLarge => "code point too large",
      DecodeError::InvalidUtf8 => "invalid UTF-8 leading byte",
    }
  }
}

impl std::fmt::Display for DecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "UTF-8 decode error: {}", self.description())
  }
}

impl std::error::Error for DecodeError {}

impl Utf8RuneError for DecodeError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    vec![
      format!("UTF-8 decode error {}", task_description),
      "".to_string(),
      format!("  Details: {}", self.description()),
    ]
  }
}

/// The maximum number of bytes kept in a [`SequenceError`]. This is the
/// longest sequence plus the byte of lookahead that the decoder inspects.
///
const MAX_ERROR_BYTES: usize = 5;

/// An error that occurred partway through decoding a buffer holding multiple
/// code points. Records where in the buffer the failure occurred.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceError {
  error: DecodeError,
  offset: usize,
  bytes: Vec<u8>,
}

impl SequenceError {
  /// Constructs a new sequence error for a decode failure at the given offset
  /// into `buffer`.
  ///
  pub fn new(error: DecodeError, buffer: &[u8], offset: usize) -> Self {
    let start = offset.min(buffer.len());
    let end = (start + MAX_ERROR_BYTES).min(buffer.len());

    Self {
      error,
      offset,
      bytes: buffer[start..end].to_vec(),
    }
  }

  /// Returns the underlying decode error.
  ///
  pub fn error(&self) -> DecodeError {
    self.error
  }

  /// Returns the byte offset into the buffer at which decoding failed.
  ///
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Returns the bytes in the buffer starting at the failure offset. At most
  /// five bytes are kept.
  ///
  pub fn bytes(&self) -> &[u8] {
    &self.bytes
  }
}

impl std::fmt::Display for SequenceError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(
      f,
      "UTF-8 decode error at offset {}: {}, bytes: {}",
      self.offset,
      self.error.description(),
      utils::inspect_bytes(&self.bytes, MAX_ERROR_BYTES)
    )
  }
}

impl std::error::Error for SequenceError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.error)
  }
}

impl Utf8RuneError for SequenceError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = self.error.to_lines(task_description);

    lines.push(format!("  Offset: {}", self.offset));

    if !self.bytes.is_empty() {
      lines.push(format!(
        "  Bytes: {}",
        utils::inspect_bytes(&self.bytes, MAX_ERROR_BYTES)
      ));
    }

    lines
  }
}
