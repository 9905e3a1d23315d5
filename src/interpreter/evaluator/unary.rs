use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
};

impl Session {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: coerces the operand to a number and negates it.
    /// - `Not`: inverts the operand's truthiness.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use seals::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Session, value::core::Value},
    /// };
    ///
    /// let v = Session::eval_unary(UnaryOperator::Negate, &Value::from("5")).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Session::eval_unary(UnaryOperator::Not, &Value::from("")).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.to_number()?)),
            UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }
}
