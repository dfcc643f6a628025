/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`], which executes statements against its
/// environment, and the expression dispatch.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, ordering comparisons and
/// equality.
pub mod binary;
