/// Numeric builtins.
///
/// Trigonometry, roots, powers, absolute value, `max`/`min` and rounding.
pub mod math;
/// Text builtins.
///
/// Concatenation, length, substrings, case mapping and trimming.
pub mod text;
/// The `if` builtin.
///
/// Chooses between already evaluated arguments by truthiness.
pub mod conditional;
/// The `print` builtin.
///
/// Writes its arguments to the session output.
pub mod print;

pub mod core;
