use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{environment::Environment, function::core::BuiltinTable},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the state that survives from one line to the next.
///
/// A session owns the variable environment, the builtin table and the text
/// written by `print`. It is created once and then handed to every
/// evaluation; separate sessions share nothing, so several can live in one
/// process.
///
/// ## Usage
///
/// ```
/// use seals::{Session, Value, eval_line};
///
/// let mut session = Session::new();
/// eval_line("let x = 5", &mut session).unwrap();
///
/// assert_eq!(eval_line("X * 2", &mut session).unwrap(), Value::Number(10.0));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    /// Variables assigned so far.
    pub environment: Environment,
    /// Builtin functions, keyed by lowercase name. Never modified after
    /// construction.
    builtins:        BuiltinTable,
    /// Text printed since the last [`Session::take_output`].
    pub(crate) output: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with an empty environment and every builtin
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               builtins:    BuiltinTable::new(),
               output:      String::new(), }
    }

    /// Removes and returns everything `print` has written so far.
    ///
    /// ## Example
    /// ```
    /// use seals::{Session, eval_line};
    ///
    /// let mut session = Session::new();
    /// eval_line("print('a', 1)", &mut session).unwrap();
    ///
    /// assert_eq!(session.take_output(), "a 1 \n");
    /// assert!(session.take_output().is_empty());
    /// ```
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// The builtin functions available to this session.
    #[must_use]
    pub const fn builtins(&self) -> &BuiltinTable {
        &self.builtins
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations, builtin calls and
    /// assignments.
    ///
    /// An assignment evaluates its right-hand side first and stores the
    /// result only if that succeeds, so a failing expression leaves the
    /// previous binding untouched.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::NumberLiteral(n) => Ok(Value::Number(*n)),
            Expr::StringLiteral(s) => Ok(Value::Text(s.clone())),
            Expr::BooleanLiteral(b) => Ok(Value::Boolean(*b)),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value)
            },
            Expr::Binary { op, left, right } => self.eval_binary_op(*op, left, right),
            Expr::Call { name, arguments } => self.eval_function_call(name, arguments),
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                self.environment.assign(name, value.clone());
                Ok(value)
            },
        }
    }

    /// Resolves a variable reference.
    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_assignment_keeps_old_binding() {
        let mut session = Session::new();
        session.environment.assign("x", Value::Number(1.0));

        let failing = Expr::Assign { name:  "x".to_string(),
                                     value: Box::new(Expr::Variable("nope".to_string())), };

        assert!(session.eval(&failing).is_err());
        assert_eq!(session.environment.get("x"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn assignment_yields_stored_value() {
        let mut session = Session::new();
        let assign = Expr::Assign { name:  "Y".to_string(),
                                    value: Box::new(Expr::StringLiteral("hi".to_string())), };

        assert_eq!(session.eval(&assign).unwrap(), Value::from("hi"));
        assert_eq!(session.environment.get("y"), Some(&Value::from("hi")));
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = Session::new();
        let second = Session::new();
        first.environment.assign("shared", Value::Boolean(true));

        assert!(second.environment.get("shared").is_none());
    }
}
