use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Appends its arguments to `output` as one line and returns `Absent`.
///
/// Each argument's rendering is followed by a single space, and the line is
/// ended with a newline. Any number of arguments is accepted.
///
/// # Example
/// ```
/// use seals::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut output = String::new();
/// let result = print(&[Value::Number(42.0), Value::from("apples")], &mut output).unwrap();
///
/// assert_eq!(result, Value::Absent);
/// assert_eq!(output, "42 apples \n");
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn print(args: &[Value], output: &mut String) -> EvalResult<Value> {
    output.push_str(&render_line(args));
    output.push('\n');
    Ok(Value::Absent)
}

/// Builds the text `print` writes, without the trailing newline.
fn render_line(args: &[Value]) -> String {
    args.iter().map(|value| format!("{value} ")).collect()
}
