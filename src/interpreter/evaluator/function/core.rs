use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Session},
            environment::normalize,
            function::{conditional, math, print, text},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the session's
/// output buffer, and returns a value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&[Value], &mut String) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a lowercase name to the function implementing the
/// builtin. Entries under `pure` only see their arguments; entries under
/// `writing` also get the output buffer.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the session's lookup map is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        pure {
            $($name:literal => $func:expr),* $(,)?
        }
        writing {
            $($w_name:literal => $w_func:expr),* $(,)?
        }
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: |args, _| ($func)(args) },
            )*
            $(
                BuiltinDef { name: $w_name, func: $w_func },
            )*
        ];
        /// Names of every builtin function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
            $($w_name,)*
        ];
    };
}

builtin_functions! {
    pure {
        "sin"    => math::sin,
        "cos"    => math::cos,
        "tan"    => math::tan,
        "sqrt"   => math::sqrt,
        "pow"    => math::pow,
        "abs"    => math::abs,
        "max"    => |args| math::min_max("max", args),
        "min"    => |args| math::min_max("min", args),
        "round"  => math::round,
        "concat" => text::concat,
        "len"    => text::len,
        "substr" => text::substr,
        "upper"  => text::upper,
        "lower"  => text::lower,
        "trim"   => text::trim,
        "if"     => conditional::if_fn,
    }
    writing {
        "print"  => print::print,
    }
}

/// Case-insensitive mapping from builtin name to implementation.
///
/// Built once per session and never modified afterwards.
///
/// ## Example
/// ```
/// use seals::interpreter::{evaluator::function::core::BuiltinTable, value::core::Value};
///
/// let table = BuiltinTable::new();
/// let sqrt = table.get("SQRT").unwrap();
///
/// assert_eq!(sqrt(&[Value::Number(9.0)], &mut String::new()).unwrap(), Value::Number(3.0));
/// assert!(table.get("nope").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BuiltinTable {
    functions: HashMap<&'static str, BuiltinFn>,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinTable {
    /// Registers every builtin.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: BUILTIN_TABLE.iter()
                                       .map(|def| (def.name, def.func))
                                       .collect(), }
    }

    /// Looks up a builtin by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.functions.get(normalize(name).as_str()).copied()
    }

    /// Returns `true` if `name` is a builtin.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Session {
    /// Evaluates a builtin call.
    ///
    /// Every argument expression is evaluated left to right before the
    /// callee is looked up, including both branches of `if`. The first
    /// argument error therefore wins over an unknown function name.
    ///
    /// # Parameters
    /// - `name`: Function name as written.
    /// - `arguments`: Argument expressions.
    ///
    /// # Returns
    /// The function result or an error if an argument, the lookup or the
    /// builtin itself fails.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr])
                                     -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        let builtin =
            self.builtins()
                .get(name)
                .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })?;

        builtin(&arg_vals, &mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        let table = BuiltinTable::new();

        for name in BUILTIN_FUNCTIONS {
            assert!(table.contains(name), "{name} missing");
            assert!(table.contains(&name.to_uppercase()));
        }
    }

    #[test]
    fn print_writes_to_the_session_output() {
        let mut session = Session::new();
        let call = Expr::Call { name:      "PRINT".to_string(),
                                arguments: vec![Expr::NumberLiteral(2.0),
                                                Expr::StringLiteral("x".to_string())], };

        assert_eq!(session.eval(&call).unwrap(), Value::Absent);
        assert_eq!(session.eval(&call).unwrap(), Value::Absent);
        assert_eq!(session.take_output(), "2 x \n2 x \n");
        assert_eq!(session.take_output(), "");
    }

    #[test]
    fn arguments_are_evaluated_before_lookup() {
        let mut session = Session::new();
        let call = Expr::Call { name:      "nope".to_string(),
                                arguments: vec![Expr::Variable("missing".to_string())], };

        assert_eq!(session.eval(&call).unwrap_err(),
                   EvalError::UndefinedVariable { name: "missing".to_string() });
    }
}
