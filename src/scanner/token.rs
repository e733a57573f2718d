/// A token produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
	pub kind:   TokenKind,
	pub lexeme: &'a str,
}

impl<'a> Token<'a> {
	/// Classify a whitespace-delimited word as a token.
	///
	/// Classification is total: a word that is neither a keyword, a number,
	/// nor a well-formed variable name still becomes a token. Lexing never
	/// fails, only the parser rejects invalid lexemes.
	pub fn classify(word: &'a str) -> Self { Token { kind: TokenKind::of(word), lexeme: word } }
}

/// The different kinds of tokens in the turtle graphics language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
	/// Structural keyword: `programEnd`, `begin`, `end`, `loop` or `=`.
	Terminal,
	/// Motion keyword: `forward` or `turn`.
	Command,
	/// Integer literal matching `[0-9]+`.
	Number,
	/// Variable name matching `[A-Za-z][A-Za-z0-9]*`.
	Variable,
	/// Any other word, kept verbatim for the parser to report.
	InvalidVariable,
}

impl TokenKind {
	/// Keywords take priority over the variable shape, so `loop` is always a
	/// Terminal even though it also matches the variable pattern.
	fn of(word: &str) -> Self {
		match word {
			"programEnd" | "begin" | "end" | "loop" | "=" => TokenKind::Terminal,
			"forward" | "turn" => TokenKind::Command,
			_ if is_number(word) => TokenKind::Number,
			_ if is_variable(word) => TokenKind::Variable,
			_ => TokenKind::InvalidVariable,
		}
	}
}

fn is_number(word: &str) -> bool { !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) }

fn is_variable(word: &str) -> bool {
	let mut bytes = word.bytes();
	bytes.next().is_some_and(|b| b.is_ascii_alphabetic()) && bytes.all(|b| b.is_ascii_alphanumeric())
}
