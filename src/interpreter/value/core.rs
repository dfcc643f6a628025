use std::{fmt, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed. Strings are reference counted so that
/// reading a variable does not copy its contents.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Also the value of an uninitialized variable.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not a
    /// number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use clex::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number(1).unwrap(), 10.0);
    /// assert!(Value::Nil.as_number(1).is_err());
    /// ```
    pub const fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { line }),
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// Only `nil` and `false` are falsy. Every other value, including `0` and
    /// the empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use clex::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// A short name for the value's type, used in log output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

/// Structural equality across all value types.
///
/// Values of different types are never equal. Numbers compare by value, with
/// `NaN` equal to itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::String(s) => s.as_str().into(),
        }
    }
}
