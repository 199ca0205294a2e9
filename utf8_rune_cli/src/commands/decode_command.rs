use clap::Args;

use utf8_rune::*;

use crate::input;

pub const ABOUT: &str = "Decodes UTF-8 data and prints each code point";

#[derive(Args)]
pub struct DecodeArgs {
  #[arg(help = "The file to decode, or hex bytes when --hex is specified")]
  input: String,

  #[arg(
    long,
    default_value_t = false,
    help = "Treat the input as hex bytes, e.g. \"E6 97 A5\", instead of a \
      filename"
  )]
  hex: bool,

  #[arg(
    long,
    default_value_t = false,
    help = "Omit the encoded bytes of each code point from the output"
  )]
  no_bytes: bool,

  #[arg(
    long,
    short,
    help = "\
      Whether to print output using bold and dimmed text. By default this is \
      set based on whether there is an active output terminal that supports \
      colored output."
  )]
  styled: Option<bool>,

  #[arg(
    long,
    default_value_t = false,
    help = "\
      Report invalid bytes and continue decoding at the next byte, rather \
      than stopping at the first error"
  )]
  skip_invalid: bool,
}

pub fn run(args: &DecodeArgs) -> Result<(), ()> {
  let task_description = format!("decoding \"{}\"", args.input);

  let bytes = match input::read_input(&args.input, args.hex) {
    Ok(bytes) => bytes,
    Err(e) => {
      e.print(&task_description);
      return Err(());
    }
  };

  // Apply any print option arguments
  let mut print_options = RunePrintOptions::new().show_bytes(!args.no_bytes);
  if let Some(styled) = args.styled {
    print_options = print_options.styled(styled);
  }

  match perform_decode(&bytes, &print_options, args.skip_invalid) {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print(&task_description);
      Err(())
    }
  }
}

fn perform_decode(
  bytes: &[u8],
  print_options: &RunePrintOptions,
  skip_invalid: bool,
) -> Result<(), SequenceError> {
  let mut iter = runes(bytes);

  loop {
    match iter.next() {
      None => return Ok(()),

      Some(Ok((offset, char))) => {
        let encoded_bytes = &bytes[offset..offset + char.len_utf8()];

        println!("{}", format_rune(offset, char, encoded_bytes, print_options));
      }

      Some(Err(e)) if skip_invalid => {
        let invalid_byte = e.bytes().get(..1).unwrap_or(&[]);

        println!(
          "{:06}  invalid   {:<13}  {}",
          e.offset(),
          inspect_bytes(invalid_byte, 1),
          e.error().description()
        );

        iter.skip_byte();
      }

      Some(Err(e)) => return Err(e),
    }
  }
}
