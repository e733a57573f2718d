use palc::Parser;
use trundle::cli::*;

fn main() {
	let trundle = trundle::Trundle;

	match Cli::parse().mode {
		Mode::Run { path } => {
			if let Err(e) = trundle.run_file(&path) {
				eprintln!("{e}");
			}
		}
		Mode::Check { path } => {
			if let Err(e) = trundle.check_file(&path) {
				eprintln!("{e}");
			}
		}
	}
}
