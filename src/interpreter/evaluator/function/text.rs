use crate::{
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{check_arity, number_arg, text_arg},
        },
        value::core::Value,
    },
    util::num::clamp_to_index,
};

/// Joins the renderings of all arguments with no separator.
///
/// Accepts any number of arguments, including none.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::text::concat, value::core::Value};
///
/// let args = [Value::from("a"), Value::Number(1.0), Value::Boolean(true), Value::Absent];
/// assert_eq!(concat(&args).unwrap(), Value::from("a1true"));
/// ```
pub fn concat(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Text(args.iter().map(ToString::to_string).collect()))
}

/// Number of characters in the rendering of the argument.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::text::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("héllo")]).unwrap(), Value::Number(5.0));
/// assert_eq!(len(&[Value::Number(100.0)]).unwrap(), Value::Number(3.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn len(args: &[Value]) -> EvalResult<Value> {
    let text = text_arg(args, 0, "len")?;
    Ok(Value::Number(text.chars().count() as f64))
}

/// Extracts part of a text: `substr(s, start[, length])`.
///
/// `start` and `length` are truncated toward zero and then clamped so the
/// slice always lies within the text. Out-of-range values give a shorter or
/// empty result, never an error. Positions count characters.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::text::substr, value::core::Value};
///
/// let hello = Value::from("hello");
///
/// assert_eq!(substr(&[hello.clone(), Value::Number(1.0)]).unwrap(), Value::from("ello"));
/// assert_eq!(substr(&[hello.clone(), Value::Number(1.0), Value::Number(3.0)]).unwrap(),
///            Value::from("ell"));
/// assert_eq!(substr(&[hello, Value::Number(10.0), Value::Number(3.0)]).unwrap(),
///            Value::from(""));
/// ```
pub fn substr(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2, "substr")?;
    let text = text_arg(args, 0, "substr")?;
    let char_count = text.chars().count();
    let start = clamp_to_index(number_arg(args, 1, "substr")?, char_count);

    let length = if args.len() > 2 {
        clamp_to_index(number_arg(args, 2, "substr")?, char_count - start)
    } else {
        char_count - start
    };

    Ok(Value::Text(text.chars().skip(start).take(length).collect()))
}

/// Upper-cases the rendering of the argument.
pub fn upper(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Text(text_arg(args, 0, "upper")?.to_uppercase()))
}

/// Lower-cases the rendering of the argument.
pub fn lower(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Text(text_arg(args, 0, "lower")?.to_lowercase()))
}

/// Removes leading and trailing whitespace from the rendering of the
/// argument.
pub fn trim(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Text(text_arg(args, 0, "trim")?.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn substr_clamps_negative_start() {
        let args = [Value::from("hello"), Value::Number(-2.0), Value::Number(2.0)];

        assert_eq!(substr(&args).unwrap(), Value::from("he"));
    }

    #[test]
    fn substr_truncates_fractions() {
        let args = [Value::from("hello"), Value::Number(1.9), Value::Number(2.9)];

        assert_eq!(substr(&args).unwrap(), Value::from("el"));
    }

    #[test]
    fn substr_needs_a_start() {
        assert!(matches!(substr(&[Value::from("hello")]),
                         Err(EvalError::NotEnoughArguments { function: "substr", .. })));
    }

    #[test]
    fn case_mapping_renders_numbers_first() {
        assert_eq!(upper(&[Value::from("MiXeD")]).unwrap(), Value::from("MIXED"));
        assert_eq!(lower(&[Value::Boolean(true)]).unwrap(), Value::from("true"));
        assert_eq!(trim(&[Value::from("  pad \t")]).unwrap(), Value::from("pad"));
    }
}
