use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::{Location, ParseError},
    interpreter::{
        lexer::{Literal, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, nest, peek},
        },
    },
};

/// Parses a unary expression.
///
/// Prefix operators nest to the right, so `!!x` is `!(!x)` and `--x` is
/// `-(-x)`. Every prefix operator opens one level of nesting.
///
/// Grammar: `unary := ("!" | "-") unary | primary`
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens);

    let op = match token.kind {
        TokenKind::Bang => UnaryOperator::Not,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_primary(tokens, depth),
    };

    let depth = nest(depth, token)?;
    tokens.next();
    let expr = parse_unary(tokens, depth)?;

    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     line: token.line })
}

/// Parses a primary expression.
///
/// Grammar:
/// `primary := NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "("
/// expression ")"`
///
/// # Errors
/// Returns [`ParseError::ExpectedExpression`] located at the next token when
/// it cannot start an expression. That token is not consumed.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens);
    let line = token.line;

    let expr = match (token.kind, &token.literal) {
        (TokenKind::Number, Some(Literal::Number(n))) => literal(LiteralValue::Number(*n), line),
        (TokenKind::String, Some(Literal::String(s))) => {
            literal(LiteralValue::String(s.clone()), line)
        },
        (TokenKind::True, _) => literal(LiteralValue::Bool(true), line),
        (TokenKind::False, _) => literal(LiteralValue::Bool(false), line),
        (TokenKind::Nil, _) => literal(LiteralValue::Nil, line),
        (TokenKind::Identifier, _) => Expr::Variable { name: token.lexeme.clone(),
                                                       line },
        (TokenKind::LeftParen, _) => {
            let depth = nest(depth, token)?;
            tokens.next();
            return parse_grouping(tokens, line, depth);
        },
        _ => {
            return Err(ParseError::ExpectedExpression { location: Location::of(token),
                                                        line });
        },
    };

    tokens.next();

    Ok(expr)
}

/// Parses the rest of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let expr = parse_expression(tokens, depth)?;
    consume(tokens, TokenKind::RightParen, "Expect ')' after expression.")?;

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line })
}

const fn literal(value: LiteralValue, line: usize) -> Expr {
    Expr::Literal { value, line }
}
