//! Recursive-descent parser for the turtle graphics language.
//!
//! One rule per production, one token of lookahead, no backtracking: the
//! operand rules try the number shape before the variable shape on the same
//! already-consumed token, and `command` only falls back to `assignment`
//! after ruling out `forward` and `turn`, so the scanner is never re-read.
//!
//! ``` BNF
//! program       → block "programEnd" ;
//! block         → "begin" statementList "end" ;
//! statementList → statement ( statement )* ;
//! statement     → loop | command ;
//! loop          → "loop" count block ;
//! command       → "forward" distance | "turn" angle | assignment ;
//! assignment    → variable "=" NUMBER ;
//! distance      → NUMBER | variable ;
//! angle         → NUMBER | variable ;
//! count         → NUMBER | variable ;
//! ```
//!
//! Errors follow first-error-wins: every rule returns `Result`, the earliest
//! failure propagates with `?`, and the unwinding rules add nothing to it.
//! `statement` alone fails benignly, returning `Ok(None)` when the lookahead
//! is `end` or the input is exhausted; that terminates the statement list and
//! leaves the enclosing block to rule on the `end` terminal itself.

pub(crate) mod tree;

use crate::{
	error::parser::ParseError,
	parser::tree::{Node, NonterminalKind},
	scanner::{Scanner, Token, TokenKind},
};

/// A syntax checker that pulls tokens from the scanner on demand and builds
/// the grammar tree bottom-up
pub(crate) struct Parser<'a> {
	scanner:   Scanner<'a>,
	/// One token of lookahead, filled by `peek` and drained by `advance`
	lookahead: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
	pub fn new(scanner: Scanner<'a>) -> Self { Self { scanner, lookahead: None } }

	/// Check the whole program and return the root of its grammar tree, or
	/// the first syntax error found.
	pub fn parse(mut self) -> Result<Node, ParseError> { self.program() }

	/// program → block "programEnd"
	fn program(&mut self) -> Result<Node, ParseError> {
		let block = self.block()?;
		match self.advance() {
			Some(token) if token.lexeme == "programEnd" => {}
			_ => return Err(ParseError::MissingProgramEnd),
		}
		Ok(Node::internal(NonterminalKind::Program, vec![block, Node::leaf("programEnd")]))
	}

	/// block → "begin" statementList "end"
	fn block(&mut self) -> Result<Node, ParseError> {
		match self.advance() {
			Some(token) if token.lexeme == "begin" => {}
			_ => return Err(ParseError::MissingBegin),
		}
		let statements = self.statement_list()?;
		match self.advance() {
			Some(token) if token.lexeme == "end" => {}
			_ => return Err(ParseError::MissingEnd),
		}
		Ok(Node::internal(NonterminalKind::Block, vec![Node::leaf("begin"), statements, Node::leaf("end")]))
	}

	/// statementList → statement ( statement )*
	fn statement_list(&mut self) -> Result<Node, ParseError> {
		let mut statements = Vec::new();
		while let Some(statement) = self.statement()? {
			statements.push(statement);
		}
		Ok(Node::internal(NonterminalKind::StatementList, statements))
	}

	/// statement → loop | command
	///
	/// Returns `Ok(None)` without consuming anything when the lookahead is
	/// `end` or the input is exhausted; neither is an error here.
	fn statement(&mut self) -> Result<Option<Node>, ParseError> {
		let inner = match self.peek() {
			None => return Ok(None),
			Some(token) if token.lexeme == "end" => return Ok(None),
			Some(token) if token.lexeme == "loop" => self.loop_statement()?,
			Some(_) => self.command()?,
		};
		Ok(Some(Node::internal(NonterminalKind::Statement, vec![inner])))
	}

	/// loop → "loop" count block
	fn loop_statement(&mut self) -> Result<Node, ParseError> {
		self.advance(); // the `loop` terminal, matched by the caller
		let count = self.operand()?;
		let block = self.block()?;
		Ok(Node::internal(NonterminalKind::Loop, vec![Node::leaf("loop"), count, block]))
	}

	/// command → "forward" distance | "turn" angle | assignment
	fn command(&mut self) -> Result<Node, ParseError> {
		let token = self.advance().ok_or(ParseError::UnexpectedEndOfInput)?;
		let children = match token.lexeme {
			"forward" => vec![Node::leaf("forward"), self.operand()?],
			"turn" => vec![Node::leaf("turn"), self.operand()?],
			_ => vec![self.assignment(token)?],
		};
		Ok(Node::internal(NonterminalKind::Command, children))
	}

	/// assignment → variable "=" NUMBER
	///
	/// The target token was already consumed by `command` while ruling out
	/// the motion keywords.
	fn assignment(&mut self, target: Token<'a>) -> Result<Node, ParseError> {
		if target.kind != TokenKind::Variable {
			return Err(ParseError::InvalidVariableName(target.lexeme.to_string()));
		}
		match self.advance() {
			Some(token) if token.lexeme == "=" => {}
			Some(token) => return Err(ParseError::ExpectedEquals(token.lexeme.to_string())),
			None => return Err(ParseError::UnexpectedEndOfInput),
		}
		let value = self.number()?;
		Ok(Node::internal(NonterminalKind::Assignment, vec![Node::leaf(target.lexeme), Node::leaf("="), value]))
	}

	/// distance | angle | count → NUMBER | variable
	///
	/// Tries the number shape first and falls back to the variable shape on
	/// the same token.
	fn operand(&mut self) -> Result<Node, ParseError> {
		match self.advance() {
			Some(token) if matches!(token.kind, TokenKind::Number | TokenKind::Variable) => {
				Ok(Node::leaf(token.lexeme))
			}
			Some(token) => Err(ParseError::InvalidNumber(token.lexeme.to_string())),
			None => Err(ParseError::UnexpectedEndOfInput),
		}
	}

	/// NUMBER → token matching [0-9]+
	fn number(&mut self) -> Result<Node, ParseError> {
		match self.advance() {
			Some(token) if token.kind == TokenKind::Number => Ok(Node::leaf(token.lexeme)),
			Some(token) => Err(ParseError::InvalidNumber(token.lexeme.to_string())),
			None => Err(ParseError::UnexpectedEndOfInput),
		}
	}

	/// Consume and return the next token
	fn advance(&mut self) -> Option<Token<'a>> {
		self.lookahead.take().or_else(|| self.scanner.next_token().ok())
	}

	/// Look at the next token without consuming it. Tokens are cheap copies
	/// of a borrowed lexeme, so the peeked token doesn't borrow the parser.
	fn peek(&mut self) -> Option<Token<'a>> {
		if self.lookahead.is_none() {
			self.lookahead = self.scanner.next_token().ok();
		}
		self.lookahead
	}
}
