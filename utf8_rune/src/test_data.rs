//! Reference data shared by the tests in this crate.

use crate::DecodeError;

/// Valid code points and their UTF-8 encodings.
///
pub const UTF8_MAP: &[(u32, &[u8])] = &[
  (0x0000, b"\x00"),
  (0x0001, b"\x01"),
  (0x007E, b"\x7E"),
  (0x007F, b"\x7F"),
  (0x0080, b"\xC2\x80"),
  (0x0081, b"\xC2\x81"),
  (0x00BF, b"\xC2\xBF"),
  (0x00C0, b"\xC3\x80"),
  (0x00C1, b"\xC3\x81"),
  (0x00C8, b"\xC3\x88"),
  (0x00D0, b"\xC3\x90"),
  (0x00E0, b"\xC3\xA0"),
  (0x00F0, b"\xC3\xB0"),
  (0x00F8, b"\xC3\xB8"),
  (0x00FF, b"\xC3\xBF"),
  (0x0100, b"\xC4\x80"),
  (0x07FF, b"\xDF\xBF"),
  (0x0400, b"\xD0\x80"),
  (0x0800, b"\xE0\xA0\x80"),
  (0x0801, b"\xE0\xA0\x81"),
  (0x1000, b"\xE1\x80\x80"),
  (0xD000, b"\xED\x80\x80"),
  (0xD7FF, b"\xED\x9F\xBF"), // last code point before the surrogates
  (0xE000, b"\xEE\x80\x80"), // first code point after the surrogates
  (0xFFFE, b"\xEF\xBF\xBE"),
  (0xFFFF, b"\xEF\xBF\xBF"),
  (0x10000, b"\xF0\x90\x80\x80"),
  (0x10001, b"\xF0\x90\x80\x81"),
  (0x40000, b"\xF1\x80\x80\x80"),
  (0x10FFFE, b"\xF4\x8F\xBF\xBE"),
  (0x10FFFF, b"\xF4\x8F\xBF\xBF"),
  (0xFFFD, b"\xEF\xBF\xBD"),
];

/// Byte sequences that must never decode, along with the error each produces.
///
/// Three byte sequences here are followed by a continuation byte, so they fail
/// the trailing byte check before anything else is looked at.
///
pub const INVALID_SEQUENCES: &[(&[u8], DecodeError)] = &[
  // Surrogate min and max
  (b"\xED\xA0\x80\x80", DecodeError::InvalidLength),
  (b"\xED\xBF\xBF\x80", DecodeError::InvalidLength),
  // Stray continuation byte
  (b"\x91\x80\x80\x80", DecodeError::InvalidUtf8),
  // Two byte sequences
  (b"\xC2\x7F\x80\x80", DecodeError::InvalidLength),
  (b"\xC2\xC0\x80\x80", DecodeError::InvalidLength),
  (b"\xDF\x7F\x80\x80", DecodeError::InvalidLength),
  (b"\xDF\xC0\x80\x80", DecodeError::InvalidLength),
  // Three byte sequences with an E0 leading byte
  (b"\xE0\x9F\xBF\x80", DecodeError::InvalidLength),
  (b"\xE0\xA0\x7F\x80", DecodeError::InvalidLength),
  (b"\xE0\xBF\xC0\x80", DecodeError::InvalidLength),
  (b"\xE0\xC0\x80\x80", DecodeError::InvalidLength),
  // Three byte sequences with an E1 leading byte
  (b"\xE1\x7F\xBF\x80", DecodeError::InvalidLength),
  (b"\xE1\x80\x7F\x80", DecodeError::InvalidLength),
  (b"\xE1\xBF\xC0\x80", DecodeError::InvalidLength),
  (b"\xE1\xC0\x80\x80", DecodeError::InvalidLength),
  // Three byte sequences with an ED leading byte
  (b"\xED\x7F\xBF\x80", DecodeError::InvalidLength),
  (b"\xED\x80\x7F\x80", DecodeError::InvalidLength),
  (b"\xED\x9F\xC0\x80", DecodeError::InvalidLength),
  (b"\xED\xA0\x80\x80", DecodeError::InvalidLength),
  // Four byte sequences with an F0 leading byte
  (b"\xF0\x8F\xBF\xBF", DecodeError::Overlong),
  (b"\xF0\x90\x7F\xBF", DecodeError::InvalidContinuationByte),
  (b"\xF0\x90\x80\x7F", DecodeError::InvalidContinuationByte),
  (b"\xF0\xBF\xBF\xC0", DecodeError::InvalidContinuationByte),
  (b"\xF0\xBF\xC0\x80", DecodeError::InvalidContinuationByte),
  (b"\xF0\xC0\x80\x80", DecodeError::InvalidContinuationByte),
  // Four byte sequences with an F1 leading byte
  (b"\xF1\x7F\xBF\xBF", DecodeError::InvalidContinuationByte),
  (b"\xF1\x80\x7F\xBF", DecodeError::InvalidContinuationByte),
  (b"\xF1\x80\x80\x7F", DecodeError::InvalidContinuationByte),
  (b"\xF1\xBF\xBF\xC0", DecodeError::InvalidContinuationByte),
  (b"\xF1\xBF\xC0\x80", DecodeError::InvalidContinuationByte),
  (b"\xF1\xC0\x80\x80", DecodeError::InvalidContinuationByte),
  // Four byte sequences with an F4 leading byte
  (b"\xF4\x7F\xBF\xBF", DecodeError::InvalidContinuationByte),
  (b"\xF4\x80\x7F\xBF", DecodeError::InvalidContinuationByte),
  (b"\xF4\x80\x80\x7F", DecodeError::InvalidContinuationByte),
  (b"\xF4\x8F\xBF\xC0", DecodeError::InvalidContinuationByte),
  (b"\xF4\x8F\xC0\x80", DecodeError::InvalidContinuationByte),
  (b"\xF4\x90\x80\x80", DecodeError::TooLarge),
];

/// Filler strings that reference code points are placed around when testing
/// the decoding of longer buffers.
///
pub const TEST_STRINGS: &[&str] = &[
  "",
  "abcd",
  "☺☻☹",
  "日a本b語ç日ð本Ê語þ日¥本¼語i日©",
  "日a本b語ç日ð本Ê語þ日¥本¼語i日©日a本b語ç日ð本Ê語þ日¥本¼語i日©日a本b語ç日ð本Ê語þ日¥本¼語i日©",
];
