pub mod interpreter;
pub mod parser;
pub mod scanner;

/// TrundleError is the top-level error type for the turtle language pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TrundleError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The first syntax error the parser found
	#[error(transparent)]
	SyntaxError(#[from] parser::ParseError),
	/// Runtime errors encountered during interpretation
	#[error(transparent)]
	RuntimeError(#[from] interpreter::InterpreterError),
}
