use crate::{
    ast::ArithmeticOperator,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
};

impl Session {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates the renderings of both operands as soon as either of
    /// them is text. Otherwise, and for `-`, `*`, `/` and `^`, both operands
    /// are coerced to numbers. Division by zero and out-of-domain powers
    /// follow IEEE 754 and produce infinities or NaN instead of an error.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A `Value::Number`, or `Value::Text` for concatenation.
    ///
    /// # Errors
    /// `NotANumber` if an operand has no numeric reading.
    ///
    /// # Example
    /// ```
    /// use seals::{
    ///     ast::ArithmeticOperator,
    ///     interpreter::{evaluator::core::Session, value::core::Value},
    /// };
    ///
    /// let r = Session::eval_arithmetic(ArithmeticOperator::Div, &Value::Number(1.0), &Value::Number(0.0));
    /// assert_eq!(r.unwrap(), Value::Number(f64::INFINITY));
    ///
    /// let r = Session::eval_arithmetic(ArithmeticOperator::Add, &Value::Boolean(true), &Value::Number(1.0));
    /// assert_eq!(r.unwrap(), Value::Number(2.0));
    /// ```
    pub fn eval_arithmetic(op: ArithmeticOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        if op == ArithmeticOperator::Add && (left.is_text() || right.is_text()) {
            return Ok(Value::Text(format!("{left}{right}")));
        }

        let l = left.to_number()?;
        let r = right.to_number()?;

        let result = match op {
            ArithmeticOperator::Add => l + r,
            ArithmeticOperator::Sub => l - r,
            ArithmeticOperator::Mul => l * r,
            ArithmeticOperator::Div => l / r,
            ArithmeticOperator::Pow => l.powf(r),
        };
        Ok(Value::Number(result))
    }
}
