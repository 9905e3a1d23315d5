use std::cmp::Ordering;

use crate::{
    ast::ComparisonOperator,
    interpreter::{evaluator::core::Session, value::core::Value},
};

impl Session {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` use [`Value::loosely_equals`]. The relational operators
    /// order both sides numerically when they both coerce to numbers, and by
    /// their rendered text otherwise. Any ordering involving NaN is false.
    ///
    /// Comparisons never fail.
    ///
    /// # Example
    /// ```
    /// use seals::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Session, value::core::Value},
    /// };
    ///
    /// let result = Session::eval_comparison(ComparisonOperator::Less, &Value::from("9"), &Value::Number(10.0));
    /// assert_eq!(result, Value::Boolean(true));
    ///
    /// let result = Session::eval_comparison(ComparisonOperator::Less, &Value::from("b"), &Value::from("abc"));
    /// assert_eq!(result, Value::Boolean(false));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: ComparisonOperator, left: &Value, right: &Value) -> Value {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => left.loosely_equals(right),
            NotEqual => !left.loosely_equals(right),
            Less | LessEqual | Greater | GreaterEqual => {
                left.compare(right).is_some_and(|ordering| ordering_satisfies(op, ordering))
            },
        };
        Value::Boolean(result)
    }
}

/// Tests whether `ordering` satisfies a comparison operator.
const fn ordering_satisfies(op: ComparisonOperator, ordering: Ordering) -> bool {
    match op {
        ComparisonOperator::Equal => ordering.is_eq(),
        ComparisonOperator::NotEqual => ordering.is_ne(),
        ComparisonOperator::Less => ordering.is_lt(),
        ComparisonOperator::LessEqual => ordering.is_le(),
        ComparisonOperator::Greater => ordering.is_gt(),
        ComparisonOperator::GreaterEqual => ordering.is_ge(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_reads_an_ordering() {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let operators = [Equal, NotEqual, Less, LessEqual, Greater, GreaterEqual];
        let accepted = |ordering| operators.map(|op| ordering_satisfies(op, ordering));

        assert_eq!(accepted(Ordering::Less), [false, true, true, true, false, false]);
        assert_eq!(accepted(Ordering::Equal), [true, false, false, true, false, true]);
        assert_eq!(accepted(Ordering::Greater), [false, true, false, false, true, true]);
    }
}
