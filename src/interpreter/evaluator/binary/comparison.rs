use crate::interpreter::{
    evaluator::{binary::arithmetic::number_operands, core::EvalResult},
    value::core::Value,
};

/// Evaluates an ordering comparison of the form `Value <Operator> Value`.
///
/// Both operands must be numbers. Any comparison involving `NaN` is false.
///
/// # Example
/// ```
/// use clex::interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value};
///
/// let result = eval_comparison(&Value::Number(3.0), &Value::Number(5.0), 1, |a, b| a < b);
/// assert_eq!(result.unwrap(), Value::Bool(true));
///
/// let result = eval_comparison(&Value::from("a"), &Value::Number(5.0), 1, |a, b| a < b);
/// assert!(result.is_err());
/// ```
pub fn eval_comparison(left: &Value,
                       right: &Value,
                       line: usize,
                       compare: fn(f64, f64) -> bool)
                       -> EvalResult<Value> {
    let (a, b) = number_operands(left, right, line)?;
    Ok(Value::Bool(compare(a, b)))
}
