use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Selects between two values: `if(cond, then, else?)`.
///
/// Returns the second argument when the first is truthy, otherwise the third
/// argument, or `Absent` when there is none. The chosen argument is returned
/// unchanged.
///
/// All arguments arrive already evaluated, so the branch that is not chosen
/// has still been computed, including any output it printed or error it
/// raised.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::conditional::if_fn, value::core::Value};
///
/// let picked = if_fn(&[Value::Number(0.0), Value::from("yes"), Value::from("no")]).unwrap();
/// assert_eq!(picked, Value::from("no"));
///
/// let missing = if_fn(&[Value::Boolean(false), Value::from("yes")]).unwrap();
/// assert_eq!(missing, Value::Absent);
/// ```
pub fn if_fn(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "if")?;

    if args[0].is_truthy() {
        return Ok(args[1].clone());
    }
    Ok(args.get(2).cloned().unwrap_or(Value::Absent))
}
