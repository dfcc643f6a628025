use log::debug;

use crate::error::ParseError;

/// Collects lexical and syntax errors for one pass over a source text.
///
/// The lexer and the parser report into the same accumulator instead of
/// stopping at the first problem, so a single run surfaces every independent
/// error. The caller inspects it afterwards to decide whether evaluation may
/// proceed.
///
/// # Example
/// ```
/// use clex::error::{Diagnostics, ParseError};
///
/// let mut diagnostics = Diagnostics::new();
/// assert!(!diagnostics.has_errors());
///
/// diagnostics.report(ParseError::UnexpectedCharacter { line: 3 });
/// assert!(diagnostics.has_errors());
/// assert_eq!(diagnostics.errors()[0].to_string(),
///            "[line 3] Error: Unexpected character.");
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ParseError>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error.
    pub fn report(&mut self, error: ParseError) {
        debug!("reported: {error}");
        self.errors.push(error);
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The errors recorded so far, in reporting order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns `value` if nothing was reported, otherwise every recorded
    /// error.
    pub fn into_result<T>(self, value: T) -> Result<T, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self.errors)
        }
    }
}
