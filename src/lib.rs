//! # clex
//!
//! clex is a tree-walking interpreter for a small dynamically typed
//! scripting language, written in Rust. It scans source text into tokens,
//! parses them into a syntax tree and evaluates the tree directly. The
//! language has numbers, strings, booleans and `nil`, arithmetic and
//! comparison operators, variables with block scoping, and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use log::debug;

use crate::{
    ast::Statement,
    error::{Diagnostics, Error, ParseError},
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Prints trees in a parenthesized prefix form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code, the accumulator that collects static errors during one
/// pass, and the top-level [`error::Error`] returned by [`run`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and renders the user-facing diagnostic lines.
/// - Maps failures to process exit codes.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment, evaluation and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Scans and parses source code.
///
/// # Errors
/// Returns every lexical and syntax error found, in source order, if there
/// was at least one.
///
/// # Examples
/// ```
/// use clex::parse_source;
///
/// let statements = parse_source("var x = 1; { x = x + 1; }").unwrap();
/// assert_eq!(statements.len(), 2);
///
/// // Two independent mistakes are both reported.
/// let errors = parse_source("var = 1;\nprint 2").unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].to_string(), "[line 1] Error at '=': Expect variable name.");
/// assert_eq!(errors[1].to_string(), "[line 2] Error at end: Expect ';' after value.");
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, Vec<ParseError>> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);

    diagnostics.into_result(statements)
}

/// Runs source code on an interpreter.
///
/// The source is evaluated only if it has no lexical or syntax errors.
/// Definitions made by earlier runs on the same interpreter remain visible.
///
/// # Errors
/// Returns [`Error::Static`] with every lexical and syntax error, or
/// [`Error::Runtime`] with the runtime error that stopped evaluation.
///
/// # Examples
/// ```
/// use clex::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// run("var a = 1;", &mut interpreter).unwrap();
/// run("print a + 2;", &mut interpreter).unwrap();
/// assert_eq!(interpreter.output(), b"3\n");
///
/// let error = run("print -\"x\";", &mut interpreter).unwrap_err();
/// assert_eq!(error.exit_code(), 70);
/// assert_eq!(error.to_string(), "Operand must be a number.\n[line] 1]");
/// ```
pub fn run<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Result<(), Error> {
    let statements = parse_source(source)?;
    debug!("running {} statements", statements.len());

    interpreter.interpret(&statements)?;

    Ok(())
}
