use std::collections::HashMap;

use crate::error::RuntimeError;

/// The flat name-to-integer mapping used during evaluation.
///
/// There is exactly one environment per run. Declarations and assignments both
/// insert or overwrite; blocks and loop bodies do not get their own frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Looks up the current value of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if `name` was never bound.
    ///
    /// # Example
    /// ```
    /// use bpp::{error::RuntimeError, interpreter::evaluator::environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 1);
    /// env.assign("x", 2);
    ///
    /// assert_eq!(env.lookup("x"), Ok(2));
    /// assert_eq!(env.lookup("y"),
    ///            Err(RuntimeError::UndefinedVariable { name: "y".to_string() }));
    /// ```
    pub fn lookup(&self, name: &str) -> Result<i64, RuntimeError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string() })
    }
}
