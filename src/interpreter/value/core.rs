use std::cmp::Ordering;

use crate::{error::EvalError, interpreter::evaluator::core::EvalResult, util::num};

/// Tolerance used for numeric equality and numeric truthiness.
pub const EPSILON: f64 = 1e-12;

/// Represents a runtime value in the interpreter.
///
/// Values are plain data: they are cloned when stored in or read from the
/// environment, and no two bindings ever share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A piece of text.
    Text(String),
    /// `true` or `false`. Produced by comparisons and logical operators.
    Boolean(bool),
    /// No value. Returned by `print` and by a false `if` without an else
    /// branch.
    Absent,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Coerces the value to a number.
    ///
    /// - `Number` is returned as is.
    /// - `Boolean` becomes `1` or `0`.
    /// - `Text` is parsed with `.` as the decimal point; surrounding
    ///   whitespace is ignored.
    /// - `Absent` never converts.
    ///
    /// # Returns
    /// - `Ok(f64)`: The numeric value.
    /// - `Err(EvalError::NotANumber)`: If the value has no numeric reading.
    ///
    /// # Example
    /// ```
    /// use seals::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(" 2.5").to_number().unwrap(), 2.5);
    /// assert_eq!(Value::Boolean(true).to_number().unwrap(), 1.0);
    /// assert!(Value::from("abc").to_number().is_err());
    /// assert!(Value::Absent.to_number().is_err());
    /// ```
    pub fn to_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Text(s) => {
                num::parse_invariant(s).ok_or_else(|| EvalError::NotANumber { value: s.clone() })
            },
            Self::Absent => Err(EvalError::NotANumber { value: String::new() }),
        }
    }

    /// Returns the truth value used by `and`, `or`, `not` and `if`.
    ///
    /// Numbers are true when their magnitude exceeds [`EPSILON`], text when
    /// it is non-empty. `Absent` is always false.
    ///
    /// # Example
    /// ```
    /// use seals::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.5).is_truthy());
    /// assert!(!Value::Number(1e-13).is_truthy());
    /// assert!(Value::from("false").is_truthy());
    /// assert!(!Value::Absent.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => n.abs() > EPSILON,
            Self::Text(s) => !s.is_empty(),
            Self::Absent => false,
        }
    }

    /// Compares two values with the equality rule behind `==` and `!=`.
    ///
    /// `Absent` equals only `Absent`. Two numbers are equal when they differ
    /// by less than [`EPSILON`] and two booleans when they are the same.
    /// Every other pairing compares the rendered text of both sides, so
    /// `1 == "1"` holds.
    ///
    /// # Example
    /// ```
    /// use seals::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.1 + 0.2).loosely_equals(&Value::Number(0.3)));
    /// assert!(Value::Number(1.0).loosely_equals(&Value::from("1")));
    /// assert!(!Value::Absent.loosely_equals(&Value::from("")));
    /// ```
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Absent, _) | (_, Self::Absent) => false,
            (Self::Number(a), Self::Number(b)) => (a - b).abs() < EPSILON,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }

    /// Orders two values for the relational operators.
    ///
    /// Both sides are coerced to numbers when possible. If either side has
    /// no numeric reading, their renderings are compared code point by code
    /// point instead. Returns `None` only when a NaN is involved.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use seals::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("10").compare(&Value::Number(9.0)), Some(Ordering::Greater));
    /// assert_eq!(Value::from("10").compare(&Value::from("9x")), Some(Ordering::Less));
    /// ```
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.to_number(), other.to_number()) {
            (Ok(a), Ok(b)) => a.partial_cmp(&b),
            _ => Some(self.to_string().cmp(&other.to_string())),
        }
    }

    /// Returns `true` if the value is [`Value::Text`].
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    /// Returns `true` if the value is [`Value::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Renders the value as text.
///
/// This rendering is shared by display, concatenation and the textual
/// fallbacks of comparison. `Absent` renders as empty text.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", num::format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_only_equal_text_through_rendering() {
        assert!(Value::Boolean(true).loosely_equals(&Value::from("true")));
        assert!(!Value::Boolean(true).loosely_equals(&Value::Number(1.0)));
    }

    #[test]
    fn relational_fallback_is_ordinal() {
        assert_eq!(Value::from("B").compare(&Value::from("a")), Some(Ordering::Less));
        assert_eq!(Value::Absent.compare(&Value::Number(1.0)), Some(Ordering::Less));
    }

    #[test]
    fn nan_has_no_order() {
        assert_eq!(Value::Number(f64::NAN).compare(&Value::Number(1.0)), None);
    }

    #[test]
    fn renders_integral_numbers_without_fraction() {
        assert_eq!(Value::Number(7.0).to_string(), "7");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Absent.to_string(), "");
    }
}
