//! Lexical analysis for the turtle graphics language.
//!
//! The language is whitespace-delimited: every token is exactly one word, and
//! newlines carry no more meaning than spaces. That makes the scanner a thin
//! classifier over `split_whitespace` rather than a character-level state
//! machine. Each word is matched against the keyword sets first, then the
//! number shape, then the variable shape; a word that fits none of them still
//! becomes a token, so scanning itself can never reject a program.

mod token;

use std::{iter::Peekable, str::SplitWhitespace};

pub(crate) use token::*;

use crate::error::scanner::EndOfInput;

/// A scanner for turtle graphics source code
pub(crate) struct Scanner<'a> {
	/// Whitespace-delimited words of the source, consumed one at a time
	words: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self { Self { words: source.split_whitespace().peekable() } }

	/// Whether the source still has a word to classify
	pub fn has_next(&mut self) -> bool { self.words.peek().is_some() }

	/// Classify the next word of the source as a token.
	///
	/// Callers are expected to check `has_next` first; past the end of the
	/// source this returns `EndOfInput` instead of panicking.
	pub fn next_token(&mut self) -> Result<Token<'a>, EndOfInput> {
		self.words.next().map(Token::classify).ok_or(EndOfInput)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kind(word: &str) -> TokenKind { Token::classify(word).kind }

	#[test]
	fn classify_terminals() {
		assert_eq!(kind("programEnd"), TokenKind::Terminal);
		assert_eq!(kind("begin"), TokenKind::Terminal);
		assert_eq!(kind("end"), TokenKind::Terminal);
		assert_eq!(kind("loop"), TokenKind::Terminal);
		assert_eq!(kind("="), TokenKind::Terminal);
	}

	#[test]
	fn classify_commands() {
		assert_eq!(kind("forward"), TokenKind::Command);
		assert_eq!(kind("turn"), TokenKind::Command);
	}

	#[test]
	fn classify_numbers() {
		assert_eq!(kind("0"), TokenKind::Number);
		assert_eq!(kind("42"), TokenKind::Number);
		assert_eq!(kind("007"), TokenKind::Number);
	}

	#[test]
	fn classify_variables() {
		assert_eq!(kind("x"), TokenKind::Variable);
		assert_eq!(kind("side"), TokenKind::Variable);
		assert_eq!(kind("myVariable123"), TokenKind::Variable);
		assert_eq!(kind("X9"), TokenKind::Variable);
	}

	#[test]
	fn classify_invalid_words() {
		assert_eq!(kind("90.5"), TokenKind::InvalidVariable);
		assert_eq!(kind("5times"), TokenKind::InvalidVariable);
		assert_eq!(kind("snake_case"), TokenKind::InvalidVariable);
		assert_eq!(kind("@"), TokenKind::InvalidVariable);
		assert_eq!(kind("-10"), TokenKind::InvalidVariable);
	}

	#[test]
	fn keywords_win_over_variable_shape() {
		// Every keyword also matches [A-Za-z][A-Za-z0-9]*
		assert_eq!(kind("loop"), TokenKind::Terminal);
		assert_eq!(kind("forward"), TokenKind::Command);
	}

	#[test]
	fn scan_whole_source() {
		let mut scanner = Scanner::new("begin forward 10\n\tturn angle\nend programEnd");
		let mut lexemes = Vec::new();
		while scanner.has_next() {
			lexemes.push(scanner.next_token().unwrap().lexeme);
		}
		assert_eq!(lexemes, ["begin", "forward", "10", "turn", "angle", "end", "programEnd"]);
	}

	#[test]
	fn next_token_past_the_end() {
		let mut scanner = Scanner::new("  \n ");
		assert!(!scanner.has_next());
		assert!(scanner.next_token().is_err());
	}
}
