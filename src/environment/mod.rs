use std::collections::HashMap;

/// The variable environment of one program run.
///
/// Created once per run and mutated only by assignment statements; bindings
/// are never removed. The language has a single flat scope, so there is no
/// enclosing environment to chain to.
#[derive(Default, Debug)]
pub(crate) struct Environment {
	variables: HashMap<String, i64>,
}

impl Environment {
	pub fn new() -> Self { Self::default() }

	/// An assignment doesn't just define a new variable, it can also rebind
	/// an existing one.
	pub fn define(&mut self, name: String, value: i64) { self.variables.insert(name, value); }

	pub fn get(&self, name: &str) -> Option<i64> { self.variables.get(name).copied() }
}
