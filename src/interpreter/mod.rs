//! Turtle program interpreter.
//!
//! Execution is structural recursion over the typed statements: each loop
//! iteration runs its whole body to completion, nested loops included,
//! before the next iteration starts. All state lives in the interpreter
//! itself, the variable environment and the handle to the motion
//! collaborator included, so one run can never observe another.

use crate::{
	environment::Environment,
	error::interpreter::InterpreterError,
	statement::{Operand, Statement},
	turtle::Turtle,
};

/// Interpreter that executes a lowered turtle program against a motion
/// collaborator
pub(crate) struct Interpreter<'t, T: Turtle> {
	environment: Environment,
	turtle:      &'t mut T,
}

impl<'t, T: Turtle> Interpreter<'t, T> {
	pub fn new(turtle: &'t mut T) -> Self { Self { environment: Environment::new(), turtle } }

	/// Execute the statements in order. Any runtime error aborts the whole
	/// run; the language has no way to catch one.
	pub fn run(&mut self, statements: &[Statement]) -> Result<(), InterpreterError> {
		for statement in statements {
			self.execute(statement)?;
		}
		Ok(())
	}

	fn execute(&mut self, statement: &Statement) -> Result<(), InterpreterError> {
		match statement {
			Statement::Forward(operand) => {
				let distance = self.resolve(operand)?;
				self.turtle.forward(distance);
			}
			Statement::Turn(operand) => {
				let angle = self.resolve(operand)?;
				self.turtle.turn(angle);
			}
			Statement::Assign { name, value } => self.environment.define(name.clone(), *value),
			Statement::Loop { count, body } => {
				// A non-positive count runs zero iterations
				for _ in 0..self.resolve(count)? {
					self.run(body)?;
				}
			}
		}
		Ok(())
	}

	/// Resolve an operand to an integer: literals are themselves, variables
	/// are looked up in the environment. The parser checks only the lexical
	/// shape of variables, never their initialization, so the lookup can
	/// still fail here.
	fn resolve(&self, operand: &Operand) -> Result<i64, InterpreterError> {
		match operand {
			Operand::Literal(value) => Ok(*value),
			Operand::Variable(name) => {
				self.environment.get(name).ok_or_else(|| InterpreterError::UnboundVariable(name.clone()))
			}
		}
	}
}
