//! # The turtle graphics language
//!
//! A program drives a turtle across the plane: it can move forward, turn,
//! bind integer variables, and repeat a block a bounded number of times.
//! Where the turtle went is the picture.
//!
//! ``` text
//! begin
//!     side = 25
//!     loop 4 begin
//!         forward side
//!         turn 90
//!     end
//! end
//! programEnd
//! ```
//!
//! The language is whitespace-delimited (one word per token, newlines mean
//! nothing) and deliberately tiny: no expressions beyond literals and
//! variables, no functions, no floating point, no unbounded loops.
//!
//! ``` BNF
//! program       → block "programEnd" ;
//! block         → "begin" statementList "end" ;
//! statementList → statement ( statement )* ;
//! statement     → loop | command ;
//! loop          → "loop" count block ;
//! command       → "forward" distance | "turn" angle | assignment ;
//! assignment    → variable "=" NUMBER ;
//! ```
//!
//! # Pipeline
//!
//! The scanner classifies each word into a typed token. The parser pulls
//! tokens on demand, checks the grammar by recursive descent, and builds a
//! grammar tree, or stops at the first syntax error, which is the only one
//! ever reported. The tree is lowered into typed statements, and the
//! interpreter executes them against a variable environment, emitting motion
//! commands to a [`Turtle`]
//! collaborator which finalizes the picture with `draw` once the run
//! completes.
//!
//! Rendering itself is out of scope: the crate ships [`PathTurtle`], which
//! traces the path as text, and anything that implements [`Turtle`] can take
//! its place.

pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod statement;
mod trundle;
mod turtle;

pub use error::{
	TrundleError, interpreter::InterpreterError, parser::ParseError, scanner::EndOfInput,
};
pub use trundle::Trundle;
pub use turtle::{PathTurtle, Turtle};
