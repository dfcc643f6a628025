use std::iter::Peekable;

use crate::{
    error::{Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Stands in for the end-of-input token when a sequence was not terminated
/// by one.
static END_OF_INPUT: Token = Token::eof(0);

/// Returns the next token without consuming it.
///
/// An exhausted stream reads as end of input.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().unwrap_or(&END_OF_INPUT)
}

/// Returns `true` if the next token is of the given kind.
pub(in crate::interpreter::parser) fn check<'a, I>(tokens: &mut Peekable<I>, kind: TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    peek(tokens).kind == kind
}

/// Consumes the next token if it is of the given kind.
pub(in crate::interpreter::parser) fn advance_if<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: TokenKind)
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == kind)
}

/// Consumes a token of the expected kind.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] carrying `message`, located at the
/// token that was found instead. That token is not consumed.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     message: &'static str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    advance_if(tokens, kind).ok_or_else(|| ParseError::unexpected(peek(tokens), message))
}

/// Enters one more level of nesting at `token`.
///
/// # Errors
/// Returns [`ParseError::TooMuchNesting`] located at `token` when `depth`
/// is already at [`MAX_NESTING`].
pub(in crate::interpreter::parser) fn nest(depth: usize, token: &Token) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::TooMuchNesting { location: Location::of(token),
                                                line:     token.line, });
    }

    Ok(depth + 1)
}
