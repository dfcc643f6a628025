/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing source code:
/// stray characters, unterminated strings, unexpected tokens and invalid
/// assignment targets. All of them are detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation: operand type mismatches,
/// undefined variables and output failures.
pub mod runtime_error;
/// Diagnostic accumulation.
///
/// The lexer and parser report into a [`Diagnostics`] value rather than
/// aborting, so that one pass can surface several errors.
pub mod diagnostics;

pub use diagnostics::Diagnostics;
pub use parse_error::{Location, ParseError};
pub use runtime_error::RuntimeError;

/// Exit status for a run that had lexical or syntax errors.
pub const EXIT_STATIC_ERROR: i32 = 65;
/// Exit status for a run that stopped on a runtime error.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// The outcome of a failed run.
///
/// A run fails either before evaluation, with every lexical and syntax error
/// found in the source, or during evaluation, with the single runtime error
/// that stopped it. The `Display` form is what gets reported to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source had lexical or syntax errors and was not evaluated.
    #[error("{}", render_static(.0))]
    Static(Vec<ParseError>),
    /// Evaluation stopped on a runtime error.
    #[error("{0}\n[line] {line}]", line = .0.line())]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The process exit status associated with this failure.
    ///
    /// # Example
    /// ```
    /// use clex::error::{Error, ParseError, RuntimeError};
    ///
    /// let static_error = Error::Static(vec![ParseError::UnterminatedString { line: 1 }]);
    /// assert_eq!(static_error.exit_code(), 65);
    ///
    /// let runtime_error = Error::from(RuntimeError::ExpectedNumber { line: 1 });
    /// assert_eq!(runtime_error.exit_code(), 70);
    /// assert_eq!(runtime_error.to_string(), "Operand must be a number.\n[line] 1]");
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Static(_) => EXIT_STATIC_ERROR,
            Self::Runtime(_) => EXIT_RUNTIME_ERROR,
        }
    }
}

impl From<Vec<ParseError>> for Error {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Static(errors)
    }
}

fn render_static(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
