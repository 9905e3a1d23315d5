use crate::interpreter::{
    evaluator::{core::EvalResult, utils::number_arg},
    value::core::Value,
};

/// Applies a one-argument `f64` method as a builtin.
///
/// The generated functions coerce their first argument to a number and
/// ignore any further arguments.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::math::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::from("16")]).unwrap(), Value::Number(4.0));
/// assert!(sqrt(&[]).is_err());
/// ```
macro_rules! unary_math_builtin {
    ($(#[$doc:meta])* $fname:ident, $name:literal, $method:ident) => {
        $(#[$doc])*
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Number(number_arg(args, 0, $name)?.$method()))
        }
    };
}

unary_math_builtin!(
    /// Sine of an angle in radians.
    sin, "sin", sin
);
unary_math_builtin!(
    /// Cosine of an angle in radians.
    cos, "cos", cos
);
unary_math_builtin!(
    /// Tangent of an angle in radians.
    tan, "tan", tan
);
unary_math_builtin!(
    /// Square root; negative input yields NaN.
    sqrt, "sqrt", sqrt
);
unary_math_builtin!(
    /// Absolute value.
    abs, "abs", abs
);
unary_math_builtin!(
    /// Rounds to the nearest integer, with halves going to the even
    /// neighbour: `round(2.5)` is `2` and `round(3.5)` is `4`.
    round, "round", round_ties_even
);

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::math::pow, value::core::Value};
///
/// let r = pow(&[Value::Number(2.0), Value::Number(10.0)]).unwrap();
/// assert_eq!(r, Value::Number(1024.0));
/// ```
pub fn pow(args: &[Value]) -> EvalResult<Value> {
    let base = number_arg(args, 0, "pow")?;
    let exponent = number_arg(args, 1, "pow")?;
    Ok(Value::Number(base.powf(exponent)))
}

/// Computes the minimum or maximum of two numbers.
///
/// Unlike [`f64::max`], a NaN on either side makes the result NaN.
///
/// # Parameters
/// - `name`: `"max"` or `"min"`.
/// - `args`: At least two arguments.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::math::min_max, value::core::Value};
///
/// let args = [Value::Number(3.0), Value::from("7")];
/// assert_eq!(min_max("max", &args).unwrap(), Value::Number(7.0));
/// assert_eq!(min_max("min", &args).unwrap(), Value::Number(3.0));
/// ```
pub fn min_max(name: &'static str, args: &[Value]) -> EvalResult<Value> {
    let a = number_arg(args, 0, name)?;
    let b = number_arg(args, 1, name)?;

    if a.is_nan() || b.is_nan() {
        return Ok(Value::Number(f64::NAN));
    }

    let result = if name == "max" { a.max(b) } else { a.min(b) };
    Ok(Value::Number(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_goes_to_even() {
        assert_eq!(round(&[Value::Number(2.5)]).unwrap(), Value::Number(2.0));
        assert_eq!(round(&[Value::Number(3.5)]).unwrap(), Value::Number(4.0));
        assert_eq!(round(&[Value::Number(-1.5)]).unwrap(), Value::Number(-2.0));
    }

    #[test]
    fn max_propagates_nan() {
        let result = min_max("max", &[Value::Number(f64::NAN), Value::Number(1.0)]).unwrap();

        assert!(matches!(result, Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn booleans_coerce() {
        assert_eq!(abs(&[Value::Boolean(true)]).unwrap(), Value::Number(1.0));
    }
}
