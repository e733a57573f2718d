/// The first syntax error found during the recursive descent.
///
/// Parsing stops at the first error: every rule returns `Result`, so the
/// earliest failure unwinds the whole descent and nothing after it is ever
/// reported. Diagnostics quote the offending lexeme verbatim where one
/// exists; tokens carry no position information.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Syntax Error: Missing programEnd statement.")]
	MissingProgramEnd,
	#[error("Syntax Error: Missing begin statement for program block.")]
	MissingBegin,
	#[error("Syntax Error: Missing end statement for program block.")]
	MissingEnd,
	/// An assignment target was not followed by `=`.
	#[error("Syntax Error: Expected \"=\", but found \"{0}\"")]
	ExpectedEquals(String),
	/// A word in variable position does not match `[A-Za-z][A-Za-z0-9]*`.
	#[error("Syntax Error: Invalid variable name \"{0}\"")]
	InvalidVariableName(String),
	/// A word in number position matches neither a number nor a variable.
	#[error("Syntax Error: Invalid number \"{0}\"")]
	InvalidNumber(String),
	/// The source ran out where an operand or `=` was still required.
	#[error("Syntax Error: Unexpected end of input.")]
	UnexpectedEndOfInput,
}
