/// Errors that can occur while lowering or executing a parsed program.
///
/// The language has no exception construct, so every runtime error is fatal
/// to the whole run.
#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
	/// Internal error: the grammar tree had a shape the parser cannot produce
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// A command referenced a variable no assignment has bound. The parser
	/// checks the lexical shape of variables but not their initialization.
	#[error("Runtime Error: Unbound variable \"{0}\"")]
	UnboundVariable(String),
	/// A digit string the parser accepted does not fit in an integer.
	#[error("Runtime Error: Number \"{0}\" is out of range")]
	MalformedOperand(String),
}
