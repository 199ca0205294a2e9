//! Decodes complete buffers of UTF-8 bytes by repeatedly decoding the code
//! point at the current offset.

use crate::{decode_rune, SequenceError};

/// Returns an iterator over the code points in the given bytes.
///
pub fn runes(bytes: &[u8]) -> Runes<'_> {
  Runes {
    bytes,
    offset: 0,
    failed: false,
  }
}

/// Iterator over the code points in a UTF-8 buffer, yielding each one along
/// with the byte offset it starts at.
///
/// Iteration stops after the first error. The failed position can be skipped
/// with [`Runes::skip_byte()`], after which iteration resumes.
///
#[derive(Clone, Debug)]
pub struct Runes<'a> {
  bytes: &'a [u8],
  offset: usize,
  failed: bool,
}

impl Runes<'_> {
  /// Returns the byte offset of the next code point to be decoded.
  ///
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Returns the bytes that have not yet been decoded.
  ///
  pub fn remaining_bytes(&self) -> &[u8] {
    &self.bytes[self.offset..]
  }

  /// Advances past a single byte and clears any error so that iteration can
  /// continue. Does nothing at the end of the buffer.
  ///
  pub fn skip_byte(&mut self) {
    if self.offset < self.bytes.len() {
      self.offset += 1;
    }

    self.failed = false;
  }
}

impl Iterator for Runes<'_> {
  type Item = Result<(usize, char), SequenceError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed || self.offset >= self.bytes.len() {
      return None;
    }

    match decode_rune(self.remaining_bytes()) {
      Ok((char, length)) => {
        let offset = self.offset;
        self.offset += length;

        Some(Ok((offset, char)))
      }

      Err(e) => {
        self.failed = true;

        Some(Err(SequenceError::new(e, self.bytes, self.offset)))
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    if self.failed {
      (0, Some(0))
    } else {
      let remaining = self.bytes.len() - self.offset;
      (remaining.div_ceil(4), Some(remaining))
    }
  }
}

impl std::iter::FusedIterator for Runes<'_> {}

/// Decodes all bytes to a native string. Returns an error describing the first
/// invalid sequence if the bytes aren't all valid.
///
pub fn decode_string(bytes: &[u8]) -> Result<String, SequenceError> {
  let mut s = String::with_capacity(bytes.len());

  for rune in runes(bytes) {
    let (_, char) = rune?;
    s.push(char);
  }

  Ok(s)
}

/// Checks that all bytes are valid, returning the number of code points they
/// contain.
///
pub fn validate(bytes: &[u8]) -> Result<usize, SequenceError> {
  runes(bytes).try_fold(0, |count, rune| rune.map(|_| count + 1))
}
