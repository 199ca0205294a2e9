use clap::Args;

use utf8_rune::*;

use crate::input;

pub const ABOUT: &str = "Checks that data is entirely valid UTF-8";

#[derive(Args)]
pub struct ValidateArgs {
  #[arg(help = "The file to validate, or hex bytes when --hex is specified")]
  input: String,

  #[arg(
    long,
    default_value_t = false,
    help = "Treat the input as hex bytes, e.g. \"E6 97 A5\", instead of a \
      filename"
  )]
  hex: bool,
}

pub fn run(args: &ValidateArgs) -> Result<(), ()> {
  let task_description = format!("validating \"{}\"", args.input);

  let bytes = match input::read_input(&args.input, args.hex) {
    Ok(bytes) => bytes,
    Err(e) => {
      e.print(&task_description);
      return Err(());
    }
  };

  match validate(&bytes) {
    Ok(count) => {
      println!("valid, {} code points in {} bytes", count, bytes.len());
      Ok(())
    }

    Err(e) => {
      e.print(&task_description);
      Err(())
    }
  }
}
