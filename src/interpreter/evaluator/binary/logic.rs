use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::core::Value,
    },
};

impl Session {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// The left operand is evaluated first. `and` stops with `false` when it
    /// is falsy and `or` stops with `true` when it is truthy; in either case
    /// the right operand is never evaluated, so errors it would raise are
    /// never seen. Otherwise the result is the truthiness of the right
    /// operand. The result is always a boolean.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    pub(crate) fn eval_logic(&mut self,
                             op: LogicalOperator,
                             left: &Expr,
                             right: &Expr)
                             -> EvalResult<Value> {
        let left = self.eval(left)?.is_truthy();
        let decided = match op {
            LogicalOperator::And => !left,
            LogicalOperator::Or => left,
        };
        if decided {
            return Ok(Value::Boolean(left));
        }

        Ok(Value::Boolean(self.eval(right)?.is_truthy()))
    }
}
