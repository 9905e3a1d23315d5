use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks that at least `expected` arguments were supplied.
///
/// Builtins ignore arguments beyond the ones they use, so only a shortfall is
/// an error.
///
/// ## Example
/// ```
/// use seals::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let arg_vals = vec![Value::Number(2.0), Value::Number(1.0)];
///
/// assert!(check_arity(&arg_vals, 2, "pow").is_ok());
/// assert!(check_arity(&arg_vals, 1, "sqrt").is_ok()); // extra arguments are fine
/// assert!(check_arity(&arg_vals, 3, "substr").is_err());
/// ```
pub const fn check_arity<T>(args: &[T],
                            expected: usize,
                            function: &'static str)
                            -> EvalResult<()> {
    if args.len() >= expected {
        Ok(())
    } else {
        Err(EvalError::NotEnoughArguments { function,
                                            expected,
                                            found: args.len() })
    }
}

/// Returns argument `index` coerced to a number.
///
/// # Errors
/// - `NotEnoughArguments` if fewer than `index + 1` arguments were given.
/// - `NotANumber` if the argument has no numeric reading.
pub fn number_arg(args: &[Value], index: usize, function: &'static str) -> EvalResult<f64> {
    check_arity(args, index + 1, function)?;
    args[index].to_number()
}

/// Returns the rendering of argument `index`.
///
/// # Errors
/// `NotEnoughArguments` if fewer than `index + 1` arguments were given.
pub fn text_arg(args: &[Value], index: usize, function: &'static str) -> EvalResult<String> {
    check_arity(args, index + 1, function)?;
    Ok(args[index].to_string())
}
