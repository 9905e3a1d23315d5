use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Session-scoped mapping from variable name to value.
///
/// Names are case-insensitive: every key is folded to lowercase before it is
/// stored or looked up, so `X` and `x` name the same variable.
///
/// ## Example
/// ```
/// use seals::interpreter::{evaluator::environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.assign("Total", Value::Number(3.0));
///
/// assert_eq!(env.get("TOTAL"), Some(&Value::Number(3.0)));
/// assert_eq!(env.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(&normalize(name))
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.variables.insert(normalize(name), value);
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(&normalize(name))
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Folds a name to the key used by the environment and the builtin table.
pub(crate) fn normalize(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_any_spelling_replaces_the_value() {
        let mut env = Environment::new();
        env.assign("count", Value::Number(1.0));
        env.assign("COUNT", Value::from("two"));

        assert_eq!(env.len(), 1);
        assert_eq!(env.get("Count"), Some(&Value::from("two")));
    }

    #[test]
    fn starts_empty() {
        let env = Environment::new();

        assert!(env.is_empty());
        assert!(!env.contains("x"));
    }
}
