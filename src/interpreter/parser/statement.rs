use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::Diagnostics,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_declaration, parse_expression},
            utils::{advance_if, check, consume, nest, peek},
        },
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - a `print` statement,
/// - a block,
/// - an expression used as a statement.
///
/// Grammar: `statement := "print" expression ";" | block | expression ";"`
///
/// The diagnostics accumulator is needed because a block recovers from
/// errors in its own declarations. Each block opens one level of nesting.
pub(in crate::interpreter::parser) fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                                                             diagnostics: &mut Diagnostics,
                                                             depth: usize)
                                                             -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(print) = advance_if(tokens, TokenKind::Print) {
        let expr = parse_expression(tokens, depth)?;
        consume(tokens, TokenKind::Semicolon, "Expect ';' after value.")?;

        return Ok(Statement::Print { expr,
                                     line: print.line });
    }

    if let Some(brace) = advance_if(tokens, TokenKind::LeftBrace) {
        let statements = parse_block(tokens, diagnostics, nest(depth, brace)?)?;

        return Ok(Statement::Block { statements,
                                     line: brace.line });
    }

    let line = peek(tokens).line;
    let expr = parse_expression(tokens, depth)?;
    consume(tokens, TokenKind::Semicolon, "Expect ';' after expression.")?;

    Ok(Statement::Expression { expr, line })
}

/// Parses a variable declaration after the `var` keyword.
///
/// Grammar: `var_declaration := IDENTIFIER ("=" expression)? ";"`
///
/// # Errors
/// Returns a `ParseError` if the name or the closing `;` is missing, or if
/// the initializer fails to parse.
pub(in crate::interpreter::parser) fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>,
                                                                   depth: usize)
                                                                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = consume(tokens, TokenKind::Identifier, "Expect variable name.")?;

    let initializer = match advance_if(tokens, TokenKind::Equal) {
        Some(_) => Some(parse_expression(tokens, depth)?),
        None => None,
    };

    consume(tokens,
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.")?;

    Ok(Statement::VarDeclaration { name: name.lexeme.clone(),
                                   initializer,
                                   line: name.line })
}

/// Parses the declarations of a block up to and including its `}`.
///
/// Declarations that fail are reported and dropped; the block itself only
/// fails when its closing brace is missing.
fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                      diagnostics: &mut Diagnostics,
                      depth: usize)
                      -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();

    while !check(tokens, TokenKind::RightBrace) && !check(tokens, TokenKind::Eof) {
        if let Some(statement) = parse_declaration(tokens, diagnostics, depth) {
            statements.push(statement);
        }
    }

    consume(tokens, TokenKind::RightBrace, "Expect '}' after block.")?;

    Ok(statements)
}
