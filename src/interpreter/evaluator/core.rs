use std::io::{self, Write};

use log::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking interpreter.
///
/// Holds the variable environment and the channel `print` writes to. The
/// global scope persists across calls to [`Interpreter::interpret`], so one
/// interpreter can run a sequence of separately parsed inputs that share
/// their variables.
///
/// ## Usage
///
/// ```
/// use clex::{
///     error::Diagnostics,
///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new());
///
/// for line in ["var greeting = \"hi\";", "print greeting + \" there\";"] {
///     let mut diagnostics = Diagnostics::new();
///     let statements = parse(&scan(line, &mut diagnostics), &mut diagnostics);
///     assert!(!diagnostics.has_errors());
///
///     interpreter.interpret(&statements).unwrap();
/// }
///
/// assert_eq!(interpreter.output(), b"hi there\n");
/// ```
pub struct Interpreter<W> {
    environment: Environment,
    out:         W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with an empty global scope that prints to `out`.
    pub fn new(out: W) -> Self {
        Self { environment: Environment::new(),
               out }
    }

    /// Executes statements in order.
    ///
    /// Stops at the first runtime error. Effects of the statements before it,
    /// printed output and global definitions, are kept.
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));

        if let Err(error) = &result {
            debug!("runtime error on line {}: {error}", error.line());
        }

        result
    }

    /// Executes a single statement in the current scope.
    ///
    /// # Returns
    /// `Ok(())` on success; a `RuntimeError` if evaluation of an expression
    /// fails or `print` cannot write its output.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression { expr, line } => {
                trace!("line {line}: expression statement");
                self.evaluate(expr)?;
                Ok(())
            },
            Statement::Print { expr, line } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                     line: *line })
            },
            Statement::VarDeclaration { name,
                                        initializer,
                                        line, } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                trace!("line {line}: define {name} as {}", value.type_name());
                self.environment.define(name, value);
                Ok(())
            },
            Statement::Block { statements, .. } => self.execute_block(statements),
        }
    }

    /// Runs `statements` in a fresh scope nested in the current one.
    ///
    /// The enclosing scope is restored whether the body finishes or stops on
    /// an error.
    fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let enclosing = self.environment.push_scope();
        let result = statements.iter()
                               .try_for_each(|statement| self.execute(statement));
        self.environment.pop_scope(enclosing);

        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant. Operands are evaluated left to
    /// right before the operator is applied.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Grouping { expr, .. } => self.evaluate(expr),
            Expr::Unary { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::Variable { name, line } => self.environment.get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone(), *line)?;
                Ok(value)
            },
        }
    }

    /// The variable environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The output channel `print` writes to.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the interpreter and returns its output channel.
    pub fn into_output(self) -> W {
        self.out
    }
}
