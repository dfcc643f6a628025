use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_addition, eval_arithmetic},
                comparison::eval_comparison,
            },
            core::{EvalResult, Interpreter},
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// `+` adds numbers or concatenates strings. `-`, `*`, `/` and the ordering
/// operators require two numbers. `==` and `!=` accept any pair of values and
/// never fail.
///
/// # Example
/// ```
/// use clex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), 1);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Equal, &Value::Number(1.0), &Value::from("1"), 1);
/// assert_eq!(result.unwrap(), Value::Bool(false));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => eval_addition(left, right, line),
        Sub => eval_arithmetic(left, right, line, |a, b| a - b),
        Mul => eval_arithmetic(left, right, line, |a, b| a * b),
        Div => eval_arithmetic(left, right, line, |a, b| a / b),
        Greater => eval_comparison(left, right, line, |a, b| a > b),
        GreaterEqual => eval_comparison(left, right, line, |a, b| a >= b),
        Less => eval_comparison(left, right, line, |a, b| a < b),
        LessEqual => eval_comparison(left, right, line, |a, b| a <= b),
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
    }
}

impl<W: Write> Interpreter<W> {
    /// Evaluates both operands, left first, then applies the operator.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            line: usize)
                                                            -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        eval_binary(op, &left, &right, line)
    }
}
