//! Decodes the UTF-8 encoded code point at the start of a byte buffer.
//!
//! | Code point range   | UTF-8 byte sequence                   |
//! |--------------------|---------------------------------------|
//! | U+0000..=U+007F    | `0xxxxxxx`                            |
//! | U+0080..=U+07FF    | `110xxxxx 10xxxxxx`                   |
//! | U+0800..=U+FFFF    | `1110xxxx 10xxxxxx 10xxxxxx`          |
//! | U+10000..=U+10FFFF | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` |
//!
//! Decoding is strict: malformed input is rejected with a [`DecodeError`]
//! rather than replaced with U+FFFD.

use crate::utils::is_continuation_byte;
use crate::DecodeError;

/// Decodes the code point at the start of the given bytes, returning it along
/// with the number of bytes it occupies.
///
/// In addition to the checks required by UTF-8, the byte immediately following
/// the sequence is inspected if present. If it is a continuation byte then the
/// sequence boundary is ambiguous and [`DecodeError::InvalidLength`] is
/// returned.
///
/// This never panics.
///
pub fn decode_rune(bytes: &[u8]) -> Result<(char, usize), DecodeError> {
  let (codepoint, length) = match bytes {
    [] => return Err(DecodeError::EmptyInput),

    // 1-byte UTF-8 character
    [byte_0, ..] if *byte_0 < 0x80 => {
      check_sequence_end(bytes, 1)?;

      (u32::from(*byte_0), 1)
    }

    // 2-byte UTF-8 character
    [byte_0, ..] if byte_0 & 0xE0 == 0xC0 => {
      decode_two_byte_sequence(bytes)?
    }

    // 3-byte UTF-8 character
    [byte_0, ..] if byte_0 & 0xF0 == 0xE0 => {
      decode_three_byte_sequence(bytes)?
    }

    // 4-byte UTF-8 character
    [byte_0, ..] if byte_0 & 0xF8 == 0xF0 => {
      decode_four_byte_sequence(bytes)?
    }

    // Continuation bytes and the reserved 11111xxx prefix can't start a
    // sequence
    _ => return Err(DecodeError::InvalidUtf8),
  };

  if (0xD800..=0xDFFF).contains(&codepoint) {
    return Err(DecodeError::SurrogateHalf);
  }

  if codepoint > 0x10FFFF {
    return Err(DecodeError::TooLarge);
  }

  char::from_u32(codepoint)
    .map(|char| (char, length))
    .ok_or(DecodeError::TooLarge)
}

/// Checks that there are at least `length` bytes available, and that the byte
/// after them, if any, is not a continuation byte.
///
fn check_sequence_end(bytes: &[u8], length: usize) -> Result<(), DecodeError> {
  if bytes.len() < length {
    return Err(DecodeError::InvalidLength);
  }

  match bytes.get(length) {
    Some(byte) if is_continuation_byte(*byte) => {
      Err(DecodeError::InvalidLength)
    }
    _ => Ok(()),
  }
}

fn decode_two_byte_sequence(bytes: &[u8]) -> Result<(u32, usize), DecodeError> {
  check_sequence_end(bytes, 2)?;

  let &[byte_0, byte_1, ..] = bytes else {
    return Err(DecodeError::InvalidLength);
  };

  if !is_continuation_byte(byte_1) {
    return Err(DecodeError::InvalidContinuationByte);
  }

  let codepoint =
    ((u32::from(byte_0) & 0x1F) << 6) | (u32::from(byte_1) & 0x3F);

  // C0 and C1 leading bytes only produce values that fit in a single byte
  if codepoint < 0x80 {
    return Err(DecodeError::Overlong);
  }

  Ok((codepoint, 2))
}

fn decode_three_byte_sequence(
  bytes: &[u8],
) -> Result<(u32, usize), DecodeError> {
  check_sequence_end(bytes, 3)?;

  let &[byte_0, byte_1, byte_2, ..] = bytes else {
    return Err(DecodeError::InvalidLength);
  };

  // Values below U+0800 fit in two bytes. This is checked on the raw bytes
  // before the continuation bytes are validated.
  if byte_0 == 0xE0 && byte_1 < 0xA0 {
    return Err(DecodeError::Overlong);
  }

  if !is_continuation_byte(byte_1) || !is_continuation_byte(byte_2) {
    return Err(DecodeError::InvalidContinuationByte);
  }

  let codepoint = ((u32::from(byte_0) & 0x0F) << 12)
    | ((u32::from(byte_1) & 0x3F) << 6)
    | (u32::from(byte_2) & 0x3F);

  Ok((codepoint, 3))
}

fn decode_four_byte_sequence(
  bytes: &[u8],
) -> Result<(u32, usize), DecodeError> {
  check_sequence_end(bytes, 4)?;

  let &[byte_0, byte_1, byte_2, byte_3, ..] = bytes else {
    return Err(DecodeError::InvalidLength);
  };

  // Values below U+10000 fit in three bytes
  if byte_0 == 0xF0 && byte_1 < 0x90 {
    return Err(DecodeError::Overlong);
  }

  if !is_continuation_byte(byte_1)
    || !is_continuation_byte(byte_2)
    || !is_continuation_byte(byte_3)
  {
    return Err(DecodeError::InvalidContinuationByte);
  }

  let codepoint = ((u32::from(byte_0) & 0x07) << 18)
    | ((u32::from(byte_1) & 0x3F) << 12)
    | ((u32::from(byte_2) & 0x3F) << 6)
    | (u32::from(byte_3) & 0x3F);

  Ok((codepoint, 4))
}
