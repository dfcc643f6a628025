use std::fmt;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: `nil`, `true`/`false`, numbers and strings. The evaluator turns
/// each of them into the matching runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    String(String),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant records the source line it came from. For operators and
/// variables that is the line of the operator or name token, which is where
/// runtime errors are reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable. Evaluates to the assigned value.
    Assign {
        /// Name of the variable being assigned.
        name:  String,
        /// The value expression.
        value: Box<Self>,
        /// Line number of the variable name.
        line:  usize,
    },
}

/// Represents a statement.
///
/// A program is an ordered sequence of statements executed one after another.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its side effects; the value is discarded.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// A variable declaration using `var`.
    VarDeclaration {
        /// The name of the variable.
        name:        String,
        /// The initial value of the variable; `nil` when absent.
        initializer: Option<Expr>,
        /// Line number of the variable name.
        line:        usize,
    },
    /// A braced block that introduces a new scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, ordering comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Prints the expression as a fully parenthesized prefix form.
///
/// # Example
/// ```
/// use clex::ast::{BinaryOperator, Expr, LiteralValue};
///
/// let number = |n: f64| Box::new(Expr::Literal { value: LiteralValue::Number(n),
///                                                line:  1, });
/// let expr = Expr::Binary { left:  number(1.0),
///                           op:    BinaryOperator::Add,
///                           right: number(2.5),
///                           line:  1, };
///
/// assert_eq!(expr.to_string(), "(+ 1 2.5)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Grouping { expr, .. } => write!(f, "(group {expr})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Assign { name, value, .. } => write!(f, "(= {name} {value})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr, .. } => write!(f, "(expr {expr})"),
            Self::Print { expr, .. } => write!(f, "(print {expr})"),
            Self::VarDeclaration { name,
                                   initializer: Some(init),
                                   .. } => write!(f, "(var {name} {init})"),
            Self::VarDeclaration { name,
                                   initializer: None,
                                   .. } => write!(f, "(var {name})"),
            Self::Block { statements, .. } => {
                write!(f, "(block")?;
                for statement in statements {
                    write!(f, " {statement}")?;
                }
                write!(f, ")")
            },
        }
    }
}
