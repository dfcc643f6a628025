use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `left + right`.
///
/// Two numbers are added and two strings are concatenated. Mixing the two,
/// or using any other type, is an error.
pub fn eval_addition(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(RuntimeError::InvalidAddition { line }),
    }
}

/// Applies a numeric operator to two number operands.
///
/// Division by zero is not an error and follows IEEE-754.
pub fn eval_arithmetic(left: &Value,
                       right: &Value,
                       line: usize,
                       apply: fn(f64, f64) -> f64)
                       -> EvalResult<Value> {
    let (a, b) = number_operands(left, right, line)?;
    Ok(Value::Number(apply(a, b)))
}

/// Extracts both operands as numbers.
///
/// # Errors
/// Returns [`RuntimeError::ExpectedNumbers`] unless both values are numbers.
pub fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::ExpectedNumbers { line }),
    }
}
