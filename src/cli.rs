use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trundle", after_long_help = "An interpreter for the turtle graphics language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Parse and run a turtle program
	Run { path: PathBuf },
	/// Parse a turtle program and print its command stream
	Check { path: PathBuf },
}
