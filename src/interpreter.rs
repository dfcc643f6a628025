/// The evaluator module executes AST nodes.
///
/// The evaluator walks the statement list, evaluates expressions, applies
/// operators, manages variable state through the environment and writes the
/// output of `print`. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement variant.
/// - Opens and closes a scope around each block, on every exit path.
/// - Reports runtime errors such as operand type mismatches and undefined
///   variables.
pub mod evaluator;
/// The environment module stores variables.
///
/// Scopes are kept in an arena and linked to their enclosing scope, giving
/// nested blocks shadowing and outward lookup.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator, delimiter or keyword. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal value and source line.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for stray characters and unterminated strings
///   without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// one statement node per top-level declaration, using recursive descent with
/// one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with location info.
/// - Recovers from syntax errors so that one pass reports several of them.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, booleans, numbers and strings.
/// - Implements truthiness, cross-type equality and the printed text form.
pub mod value;
