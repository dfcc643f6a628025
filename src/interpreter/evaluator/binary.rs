/// Operator dispatch.
pub mod core;

/// Addition, concatenation and the numeric operators.
pub mod arithmetic;

/// Ordering comparisons over numbers.
pub mod comparison;
