//! Entry point for the utf8rune CLI tool.

mod commands;
mod input;

use clap::{Parser, Subcommand};

use commands::{decode_command, validate_command};

#[derive(Parser)]
#[command(
  name = "utf8rune",
  bin_name = "utf8rune",
  version = env!("CARGO_PKG_VERSION"),
  about = "utf8rune is a CLI app for strictly decoding UTF-8 data",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[arg(
    long,
    default_value_t = false,
    help = "Write timing stats to stderr on exit"
  )]
  print_stats: bool,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = decode_command::ABOUT)]
  Decode(decode_command::DecodeArgs),

  #[command(about = validate_command::ABOUT)]
  Validate(validate_command::ValidateArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  let started_at = std::time::Instant::now();

  let r = match &cli.command {
    Commands::Decode(args) => decode_command::run(args),
    Commands::Validate(args) => validate_command::run(args),
  };

  if cli.print_stats {
    eprintln!();
    eprintln!("-----");
    eprintln!(
      "Time elapsed: {:.3} seconds",
      started_at.elapsed().as_secs_f64()
    );
  }

  r
}
