/// Returns whether a byte is a UTF-8 continuation byte, i.e. has the form
/// `10xxxxxx`.
///
pub(crate) fn is_continuation_byte(byte: u8) -> bool {
  byte & 0xC0 == 0x80
}

/// Inspects a byte slice in hexadecimal, e.g. `[1A 2B 3C 4D]`. If the number of
/// bytes in the slice exceeds `max_length` then not all bytes will be shown and
/// a trailing ellipsis will be appended, e.g. `[1A 2B 3C 4D ...]`.
///
pub fn inspect_bytes(bytes: &[u8], max_length: usize) -> String {
  let byte_count = std::cmp::min(max_length, bytes.len());

  let s = bytes[0..byte_count]
    .iter()
    .map(|byte| format!("{:02X}", byte))
    .collect::<Vec<_>>()
    .join(" ");

  if byte_count == bytes.len() {
    format!("[{}]", s)
  } else {
    format!("[{} ...]", s)
  }
}
