use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::peek},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative binary operators: `==` and `!=`.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// Handles `>`, `>=`, `<` and `<=`.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `term := factor (("-" | "+") factor)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("/" | "*") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Folds `operand (op operand)*` into a left-leaning tree of
/// [`Expr::Binary`] nodes, accepting the operators selected by `accepts`.
///
/// Each node records the line of its operator token.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens, depth)?;

    loop {
        let token = peek(tokens);

        if let Some(op) = token_to_binary_operator(token.kind)
           && accepts(op)
        {
            tokens.next();
            let right = operand(tokens, depth)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Maps a token kind to the binary operator it denotes, if any.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
