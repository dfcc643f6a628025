use std::iter::Peekable;

use log::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::{Diagnostics, Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_equality,
            statement::{parse_statement, parse_var_declaration},
            utils::{advance_if, check, nest, peek},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of blocks, groupings, prefix operators and
/// chained assignments within one statement.
pub const MAX_NESTING: usize = 128;

/// Parses a token sequence into a list of statements.
///
/// Parsing does not stop at the first syntax error. Each failed declaration
/// is reported to `diagnostics`, the parser skips ahead to the next statement
/// boundary, and the failed declaration is left out of the result.
///
/// Grammar: `program := declaration* EOF`
///
/// # Example
/// ```
/// use clex::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("print 1 + 2 * 3;", &mut diagnostics);
/// let statements = parse(&tokens, &mut diagnostics);
///
/// assert!(!diagnostics.has_errors());
/// assert_eq!(statements[0].to_string(), "(print (+ 1 (* 2 3)))");
/// ```
pub fn parse(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Statement> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while !check(&mut iter, TokenKind::Eof) {
        if let Some(statement) = parse_declaration(&mut iter, diagnostics, 0) {
            statements.push(statement);
        }
    }

    debug!("parsed {} statements, {} diagnostics so far",
           statements.len(),
           diagnostics.errors().len());

    statements
}

/// Parses one declaration, recovering from a syntax error inside it.
///
/// Grammar: `declaration := "var" var_declaration | statement`
///
/// `depth` is the nesting level of the enclosing blocks.
///
/// # Returns
/// The parsed statement, or `None` when it failed. The error has then been
/// reported and the stream advanced to the next statement boundary.
pub(in crate::interpreter::parser) fn parse_declaration<'a, I>(tokens: &mut Peekable<I>,
                                                               diagnostics: &mut Diagnostics,
                                                               depth: usize)
                                                               -> Option<Statement>
    where I: Iterator<Item = &'a Token>
{
    let result = if advance_if(tokens, TokenKind::Var).is_some() {
        parse_var_declaration(tokens, depth)
    } else {
        parse_statement(tokens, diagnostics, depth)
    };

    match result {
        Ok(statement) => {
            trace!("parsed {statement}");
            Some(statement)
        },
        Err(error) => {
            diagnostics.report(error);
            synchronize(tokens);
            None
        },
    }
}

/// Discards tokens up to the next statement boundary.
///
/// Stops just after a `;`, or in front of a keyword that starts a statement.
/// The end-of-input token is never consumed.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    if check(tokens, TokenKind::Eof) {
        return;
    }

    while let Some(token) = tokens.next() {
        if token.kind == TokenKind::Semicolon {
            return;
        }

        let next = peek(tokens).kind;
        if next == TokenKind::Eof || next.starts_statement() {
            return;
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Errors
/// Returns [`ParseError::TooMuchNesting`] once `depth` would pass
/// [`MAX_NESTING`], along with the errors of the levels below.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_assignment(tokens, depth)
}

/// Parses an assignment.
///
/// The target is parsed as an ordinary expression first; only when an `=`
/// follows is it checked to be a bare variable. Assignment is
/// right-associative, so `a = b = 1` assigns `1` to both.
///
/// Grammar: `assignment := IDENTIFIER "=" assignment | equality`
///
/// # Errors
/// Returns [`ParseError::InvalidAssignmentTarget`] at the `=` token when the
/// left side is not a variable.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_equality(tokens, depth)?;

    let Some(equals) = advance_if(tokens, TokenKind::Equal) else {
        return Ok(target);
    };

    let value = parse_assignment(tokens, nest(depth, equals)?)?;

    match target {
        Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                           value: Box::new(value),
                                                           line }),
        _ => Err(ParseError::InvalidAssignmentTarget { location: Location::of(equals),
                                                       line:     equals.line, }),
    }
}
