use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. Any other operand is an error.
/// - `Not`: the negated truthiness of any value.
///
/// # Example
/// ```
/// use clex::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("5"), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates the operand, then applies the operator.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           expr: &Expr,
                                                           line: usize)
                                                           -> EvalResult<Value> {
        let value = self.evaluate(expr)?;
        eval_unary(op, &value, line)
    }
}
