use crate::interpreter::lexer::{Token, TokenKind};

/// Where in the token stream a syntax error was detected.
///
/// Rendered as the `WHERE` part of a diagnostic line: ` at end` for the
/// end-of-input token and ` at 'lexeme'` for any other token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The error was found at the end of the input.
    End,
    /// The error was found at a token with this lexeme.
    Lexeme(String),
}

impl Location {
    /// Returns the location of `token`.
    #[must_use]
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Eof => Self::End,
            _ => Self::Lexeme(token.lexeme.clone()),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::End => write!(f, " at end"),
            Self::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
///
/// The `Display` form is the diagnostic line reported to the user,
/// `[line L] Error WHERE: MESSAGE`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that does not start any token.
    #[error("[line {line}] Error: Unexpected character.")]
    UnexpectedCharacter {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal that reached the end of input without a closing `"`.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The line reached at the end of input.
        line: usize,
    },
    /// A specific token kind was required but something else was found.
    #[error("[line {line}] Error{location}: {message}")]
    UnexpectedToken {
        /// The offending token.
        location: Location,
        /// What was expected, e.g. `Expect ';' after value.`.
        message:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression.
    #[error("[line {line}] Error{location}: Expect expression.")]
    ExpectedExpression {
        /// The offending token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The left side of `=` is not a variable.
    #[error("[line {line}] Error{location}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// Location of the `=` token.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Blocks, groupings, prefix operators or assignments nested deeper than
    /// the parser allows.
    #[error("[line {line}] Error{location}: Too much nesting.")]
    TooMuchNesting {
        /// The token that opened one level too many.
        location: Location,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Builds a [`ParseError::UnexpectedToken`] located at `token`.
    #[must_use]
    pub fn unexpected(token: &Token, message: &'static str) -> Self {
        Self::UnexpectedToken { location: Location::of(token),
                                message,
                                line: token.line }
    }

    /// The source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line }
            | Self::UnterminatedString { line }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidAssignmentTarget { line, .. }
            | Self::TooMuchNesting { line, .. } => *line,
        }
    }
}
