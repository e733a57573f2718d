//! Typed statements executed by the interpreter.
//!
//! The grammar tree keeps every terminal the parser saw, `begin`/`end`
//! markers included. Lowering walks the tree once, by structural recursion,
//! and keeps only what execution needs: the commands, with each loop body
//! nested inside its loop. Nesting is therefore represented natively and the
//! interpreter never has to rediscover block boundaries by scanning for
//! `end` markers.

use anyhow::anyhow;

use crate::{
	error::interpreter::InterpreterError,
	parser::tree::{Node, NonterminalKind},
};

/// A statement of the turtle graphics language
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement {
	/// Move the turtle forward by the operand
	Forward(Operand),
	/// Rotate the turtle clockwise by the operand, in degrees
	Turn(Operand),
	/// Bind a variable to an integer value
	Assign { name: String, value: i64 },
	/// Execute the body `count` times
	Loop { count: Operand, body: Vec<Statement> },
}

/// A command operand: an integer literal, or a variable looked up at run time
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Operand {
	Literal(i64),
	Variable(String),
}

impl Operand {
	/// Digit strings parse to literals, everything else is a variable
	/// reference. A digit string the parser accepted can still be too large
	/// to represent, which is a runtime error rather than a syntax error.
	fn parse(word: &str) -> Result<Operand, InterpreterError> {
		if word.bytes().all(|b| b.is_ascii_digit()) {
			word.parse().map(Operand::Literal).map_err(|_| InterpreterError::MalformedOperand(word.to_string()))
		} else {
			Ok(Operand::Variable(word.to_string()))
		}
	}
}

/// Lower a `program` tree into the statement list of its top-level block
pub(crate) fn lower_program(root: &Node) -> Result<Vec<Statement>, InterpreterError> {
	let children = children_of(root, NonterminalKind::Program)?;
	lower_block(expect_child(children, 0, "program")?)
}

fn lower_block(node: &Node) -> Result<Vec<Statement>, InterpreterError> {
	let children = children_of(node, NonterminalKind::Block)?;
	let list = expect_child(children, 1, "block")?;
	children_of(list, NonterminalKind::StatementList)?.iter().map(lower_statement).collect()
}

fn lower_statement(node: &Node) -> Result<Statement, InterpreterError> {
	let children = children_of(node, NonterminalKind::Statement)?;
	match expect_child(children, 0, "statement")? {
		Node::Internal { kind: NonterminalKind::Loop, children } => {
			let count = leaf_operand(expect_child(children, 1, "loop")?)?;
			let body = lower_block(expect_child(children, 2, "loop")?)?;
			Ok(Statement::Loop { count, body })
		}
		Node::Internal { kind: NonterminalKind::Command, children } => lower_command(children),
		other => Err(InterpreterError::InternalError(anyhow!("expected loop or command node, found {other:?}"))),
	}
}

fn lower_command(children: &[Node]) -> Result<Statement, InterpreterError> {
	match expect_child(children, 0, "command")? {
		Node::Leaf(keyword) if keyword == "forward" => {
			Ok(Statement::Forward(leaf_operand(expect_child(children, 1, "command")?)?))
		}
		Node::Leaf(keyword) if keyword == "turn" => {
			Ok(Statement::Turn(leaf_operand(expect_child(children, 1, "command")?)?))
		}
		assignment => {
			let children = children_of(assignment, NonterminalKind::Assignment)?;
			let name = leaf_value(expect_child(children, 0, "assignment")?)?;
			// children[1] is the `=` terminal, kept in the tree but not here
			let value = leaf_value(expect_child(children, 2, "assignment")?)?;
			let value =
				value.parse().map_err(|_| InterpreterError::MalformedOperand(value.to_string()))?;
			Ok(Statement::Assign { name: name.to_string(), value })
		}
	}
}

fn children_of<'n>(node: &'n Node, expected: NonterminalKind) -> Result<&'n [Node], InterpreterError> {
	match node {
		Node::Internal { kind, children } if *kind == expected => Ok(children),
		other => Err(InterpreterError::InternalError(anyhow!("expected {expected:?} node, found {other:?}"))),
	}
}

fn expect_child<'n>(children: &'n [Node], index: usize, rule: &str) -> Result<&'n Node, InterpreterError> {
	children
		.get(index)
		.ok_or_else(|| InterpreterError::InternalError(anyhow!("{rule} node is missing child {index}")))
}

fn leaf_value(node: &Node) -> Result<&str, InterpreterError> {
	match node {
		Node::Leaf(value) => Ok(value),
		other => Err(InterpreterError::InternalError(anyhow!("expected a leaf, found {other:?}"))),
	}
}

fn leaf_operand(node: &Node) -> Result<Operand, InterpreterError> { Operand::parse(leaf_value(node)?) }

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn lower(input: &str) -> Result<Vec<Statement>, InterpreterError> {
		let tree = Parser::new(Scanner::new(input)).parse().unwrap();
		lower_program(&tree)
	}

	#[test]
	fn lower_commands() {
		let statements = lower("begin forward 10 turn angle end programEnd").unwrap();
		assert_eq!(statements, vec![
			Statement::Forward(Operand::Literal(10)),
			Statement::Turn(Operand::Variable("angle".to_string())),
		]);
	}

	#[test]
	fn lower_assignment_drops_the_equals_terminal() {
		let statements = lower("begin x = 5 end programEnd").unwrap();
		assert_eq!(statements, vec![Statement::Assign { name: "x".to_string(), value: 5 }]);
	}

	#[test]
	fn lower_nested_loops() {
		let statements = lower("begin loop 2 begin loop 3 begin forward 1 end end end programEnd").unwrap();
		assert_eq!(statements, vec![Statement::Loop {
			count: Operand::Literal(2),
			body:  vec![Statement::Loop {
				count: Operand::Literal(3),
				body:  vec![Statement::Forward(Operand::Literal(1))],
			}],
		}]);
	}

	#[test]
	fn lower_empty_block() {
		assert_eq!(lower("begin end programEnd").unwrap(), Vec::new());
	}

	#[test]
	fn oversized_literal_is_a_malformed_operand() {
		let error = lower("begin forward 99999999999999999999 end programEnd").unwrap_err();
		assert_eq!(error.to_string(), "Runtime Error: Number \"99999999999999999999\" is out of range");
	}
}
