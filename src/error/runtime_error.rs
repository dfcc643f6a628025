use std::io;

/// Represents all errors that can occur during evaluation.
///
/// Each variant carries the line of the token that caused it. The `Display`
/// form is the bare message; [`crate::error::Error`] adds the line.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A unary `-` was applied to something other than a number.
    #[error("Operand must be a number.")]
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic or ordering operator received a non-number operand.
    #[error("Operands must be two numbers.")]
    ExpectedNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` received operands that are neither two numbers nor two strings.
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable was read or assigned without being declared in any
    /// enclosing scope.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The output channel of a `print` statement failed.
    #[error("Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: io::Error,
        /// The source line of the `print` statement.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedNumber { line }
            | Self::ExpectedNumbers { line }
            | Self::InvalidAddition { line }
            | Self::UndefinedVariable { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
