use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
};

impl Session {
    /// Evaluates a binary expression node.
    ///
    /// `and` and `or` are handed their operand expressions unevaluated so
    /// they can skip the right-hand side. Every other operator evaluates the
    /// left operand, then the right one, before computing the result.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> EvalResult<Value> {
        if let BinaryOperator::Logical(op) = op {
            return self.eval_logic(op, left, right);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two already computed values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, equality and ordering
    /// to `eval_comparison`. For `and` and `or` both values are already
    /// known, so only their truthiness is combined.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use seals::{
    ///     ast::ArithmeticOperator,
    ///     interpreter::{evaluator::core::Session, value::core::Value},
    /// };
    ///
    /// let add = ArithmeticOperator::Add.into();
    /// let result = Session::eval_binary(add, &Value::Number(3.0), &Value::from("4"));
    /// assert_eq!(result.unwrap(), Value::from("34"));
    ///
    /// let mul = ArithmeticOperator::Mul.into();
    /// let result = Session::eval_binary(mul, &Value::Number(3.0), &Value::from("4"));
    /// assert_eq!(result.unwrap(), Value::Number(12.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match op {
            BinaryOperator::Arithmetic(op) => Self::eval_arithmetic(op, left, right),
            BinaryOperator::Comparison(op) => Ok(Self::eval_comparison(op, left, right)),
            BinaryOperator::Logical(LogicalOperator::And) => {
                Ok(Value::Boolean(left.is_truthy() && right.is_truthy()))
            },
            BinaryOperator::Logical(LogicalOperator::Or) => {
                Ok(Value::Boolean(left.is_truthy() || right.is_truthy()))
            },
        }
    }
}
