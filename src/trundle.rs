use std::{fs::read_to_string, path::Path};

use anyhow::Context;

use crate::{
	TrundleError, interpreter::Interpreter, parser::Parser, scanner::Scanner, statement,
	turtle::{PathTurtle, Turtle},
};

/// Trundle wires the pipeline stages together: scan, parse, lower, run.
pub struct Trundle;

impl Trundle {
	/// Parse and execute the turtle program in the given file, tracing its
	/// path with a [`PathTurtle`].
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrundleError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source)
	}

	/// Parse the turtle program in the given file without executing it. On
	/// success the flattened command stream is printed, one word per token.
	pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TrundleError> {
		let source = read_to_string(path).context("Failed open source file")?;
		let tree = Parser::new(Scanner::new(&source)).parse()?;
		println!("{}", tree.leaf_preorder().join(" "));
		Ok(())
	}

	fn run(&self, source: &str) -> Result<(), TrundleError> {
		let tree = Parser::new(Scanner::new(source)).parse()?;
		let statements = statement::lower_program(&tree)?;
		let mut turtle = PathTurtle::new();
		Interpreter::new(&mut turtle).run(&statements)?;
		turtle.draw();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn run_a_valid_program() {
		let trundle = Trundle;
		assert!(trundle.run("begin loop 4 begin forward 10 turn 90 end end programEnd").is_ok());
	}

	#[test]
	fn syntax_errors_surface_unchanged() {
		let trundle = Trundle;
		let error = trundle.run("begin forward 10 end").unwrap_err();
		assert_eq!(error.to_string(), "Syntax Error: Missing programEnd statement.");
	}

	#[test]
	fn runtime_errors_surface_unchanged() {
		let trundle = Trundle;
		let error = trundle.run("begin forward x end programEnd").unwrap_err();
		assert_eq!(error.to_string(), "Runtime Error: Unbound variable \"x\"");
	}

	#[test]
	fn no_interpretation_on_a_failed_parse() {
		// A failed parse returns before lowering, so a program that is both
		// syntactically and semantically broken reports only the syntax error
		let trundle = Trundle;
		let error = trundle.run("begin forward x end").unwrap_err();
		assert!(matches!(error, TrundleError::SyntaxError(_)));
	}
}
