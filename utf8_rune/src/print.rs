//! Formats decoded code points for display, one per line.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::utils;

/// Configurable options used when printing decoded code points.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RunePrintOptions {
  /// Whether to include styling such as bold and dimmed text. This should only
  /// be used when printing to a terminal that supports it.
  ///
  /// By default this is set based on automatically detecting whether the output
  /// stream supports color.
  pub styled: bool,

  /// Whether to include the encoded bytes of each code point in the printed
  /// output.
  ///
  /// By default this is enabled.
  pub show_bytes: bool,
}

impl RunePrintOptions {
  /// Constructs new rune print options and auto-detects output settings when
  /// possible.
  ///
  pub fn new() -> Self {
    let is_terminal = std::io::stdout().is_terminal();
    let color_support =
      supports_color::on(supports_color::Stream::Stdout).is_some();

    Self {
      styled: is_terminal && color_support,
      show_bytes: true,
    }
  }

  /// Sets the [`RunePrintOptions::styled`] value.
  ///
  pub fn styled(self, styled: bool) -> Self {
    Self { styled, ..self }
  }

  /// Sets the [`RunePrintOptions::show_bytes`] value.
  ///
  pub fn show_bytes(self, show_bytes: bool) -> Self {
    Self { show_bytes, ..self }
  }
}

impl Default for RunePrintOptions {
  fn default() -> Self {
    Self::new()
  }
}

/// Formats a single decoded code point as a line of text made up of its byte
/// offset, code point, encoded bytes, and the character itself, e.g.
/// `000003  U+65E5    [E6 97 A5]     日`. Control characters are shown as `·`.
///
pub fn format_rune(
  offset: usize,
  char: char,
  bytes: &[u8],
  print_options: &RunePrintOptions,
) -> String {
  let mut codepoint = format!("U+{:04X}", u32::from(char));
  codepoint = format!("{:<8}", codepoint);
  if print_options.styled {
    codepoint = codepoint.bold().to_string();
  }

  let visible_char = if char.is_control() { '·' } else { char };

  if print_options.show_bytes {
    let mut bytes = format!("{:<13}", utils::inspect_bytes(bytes, 4));
    if print_options.styled {
      bytes = bytes.dimmed().to_string();
    }

    format!("{:06}  {}  {}  {}", offset, codepoint, bytes, visible_char)
  } else {
    format!("{:06}  {}  {}", offset, codepoint, visible_char)
  }
}
