/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its truthiness and
/// equality rules, and the text form used by `print`.
pub mod core;
