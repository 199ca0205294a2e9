//! Reads the bytes to be decoded from a file or from a string of hex digits.

use utf8_rune::Utf8RuneError;

/// An error that occurred reading the input bytes for a command.
///
#[derive(Debug)]
pub enum InputError {
  /// The input file could not be opened or read.
  FileError { when: String, details: String },

  /// The input was not a valid string of hex bytes.
  HexInvalid { details: String },
}

impl std::fmt::Display for InputError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      InputError::FileError { when, details } => {
        write!(f, "Input file error {}, details: {}", when, details)
      }
      InputError::HexInvalid { details } => {
        write!(f, "Invalid hex input, details: {}", details)
      }
    }
  }
}

impl Utf8RuneError for InputError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      InputError::FileError { when, details } => vec![
        format!("Input file error {}", task_description),
        "".to_string(),
        format!("  When: {}", when),
        format!("  Details: {}", details),
      ],
      InputError::HexInvalid { details } => vec![
        format!("Invalid hex input {}", task_description),
        "".to_string(),
        format!("  Details: {}", details),
      ],
    }
  }
}

/// Returns the bytes for a command's input. When `hex` is set the input is
/// parsed as hex bytes, otherwise it is the name of the file to read.
///
pub fn read_input(input: &str, hex: bool) -> Result<Vec<u8>, InputError> {
  if hex {
    parse_hex(input)
  } else {
    std::fs::read(input).map_err(|e| InputError::FileError {
      when: "Reading file".to_string(),
      details: e.to_string(),
    })
  }
}

/// Parses a string of hex bytes, e.g. `"E6 97 A5"`, `"e6:97:a5"`, or
/// `"0xE697A5"`. Bytes may be separated by whitespace, colons, or commas.
///
fn parse_hex(input: &str) -> Result<Vec<u8>, InputError> {
  let mut bytes = vec![];

  for token in input
    .split(|c: char| c.is_whitespace() || c == ':' || c == ',')
    .filter(|token| !token.is_empty())
  {
    let digits = token
      .strip_prefix("0x")
      .or_else(|| token.strip_prefix("0X"))
      .unwrap_or(token);

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(InputError::HexInvalid {
        details: format!("\"{}\" contains invalid hex digits", token),
      });
    }

    if digits.is_empty() || digits.len() % 2 != 0 {
      return Err(InputError::HexInvalid {
        details: format!("\"{}\" is not a whole number of bytes", token),
      });
    }

    for pair in digits.as_bytes().chunks(2) {
      let byte = (hex_digit_value(pair[0]) << 4) | hex_digit_value(pair[1]);
      bytes.push(byte);
    }
  }

  Ok(bytes)
}

/// Returns the value of an ASCII hex digit. Other bytes map to zero.
///
fn hex_digit_value(digit: u8) -> u8 {
  match digit {
    b'0'..=b'9' => digit - b'0',
    b'a'..=b'f' => digit - b'a' + 10,
    b'A'..=b'F' => digit - b'A' + 10,
    _ => 0,
  }
}
