/// Parser entry points and error recovery.
///
/// Contains [`core::parse`], the declaration loop, the panic-mode
/// `synchronize` routine and the expression entry point including
/// assignment.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix `!` and `-`, literals, variable references and
/// parenthesized groups.
pub mod unary;

/// Binary operator precedence levels.
///
/// Parses equality, comparison, additive and multiplicative expressions, all
/// left-associative.
pub mod binary;

/// Statement parsing.
///
/// Implements variable declarations, `print` statements, blocks and
/// expression statements.
pub mod statement;

/// Token-stream helpers shared by the parser levels.
pub mod utils;
