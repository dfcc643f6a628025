use std::collections::HashMap;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Handle to a scope stored in an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, which exists for the lifetime of the environment.
    pub const GLOBAL: Self = Self(0);
}

#[derive(Debug, Default)]
struct Scope {
    values: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Variable storage for the evaluator.
///
/// Scopes live in an arena and refer to their enclosing scope by handle.
/// Lookup starts at the current scope and follows the parent links out to the
/// global scope, so an inner definition shadows an outer one.
///
/// # Example
/// ```
/// use clex::interpreter::{environment::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Number(1.0));
///
/// let enclosing = env.push_scope();
/// env.define("x", Value::Number(2.0));
/// assert_eq!(env.get("x", 1).unwrap(), Value::Number(2.0));
///
/// env.pop_scope(enclosing);
/// assert_eq!(env.get("x", 1).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes:  Vec<Scope>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope::default()],
               current: ScopeId::GLOBAL, }
    }

    /// Binds `name` in the current scope, replacing any existing binding of
    /// the same name in that scope.
    pub fn define(&mut self, name: &str, value: Value) {
        self.scope_mut(self.current)
            .values
            .insert(name.to_string(), value);
    }

    /// Reads the nearest binding of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no scope in the chain
    /// defines `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.resolve(name)
            .and_then(|id| self.scopes[id.0].values.get(name))
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Overwrites the nearest existing binding of `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] if no scope in the chain
    /// defines `name`.
    ///
    /// # Example
    /// ```
    /// use clex::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(env.assign("y", Value::Nil, 3).is_err());
    ///
    /// env.define("y", Value::Nil);
    /// env.assign("y", Value::Bool(true), 3).unwrap();
    /// assert_eq!(env.get("y", 3).unwrap(), Value::Bool(true));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let id = self.resolve(name)
                     .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                                      line })?;

        if let Some(slot) = self.scope_mut(id).values.get_mut(name) {
            *slot = value;
        }

        Ok(())
    }

    /// Enters a new scope nested in the current one.
    ///
    /// Returns the handle of the scope that was current before the call; pass
    /// it to [`Environment::pop_scope`] to leave the new scope.
    pub fn push_scope(&mut self) -> ScopeId {
        let enclosing = self.current;
        self.scopes.push(Scope { values: HashMap::new(),
                                 parent: Some(enclosing), });
        self.current = ScopeId(self.scopes.len() - 1);
        trace!("entered scope {} (depth {})", self.current.0, self.depth());

        enclosing
    }

    /// Leaves the current scope, discarding its bindings, and makes
    /// `enclosing` current again.
    pub fn pop_scope(&mut self, enclosing: ScopeId) {
        trace!("leaving scope {} (depth {})", self.current.0, self.depth());
        self.scopes.truncate(self.current.0.max(1));
        self.current = enclosing;
    }

    /// The handle of the current scope.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of scopes between the current scope and the global scope,
    /// counting both.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self.current), |id| self.scopes[id.0].parent).count()
    }

    fn resolve(&self, name: &str) -> Option<ScopeId> {
        std::iter::successors(Some(self.current), |id| self.scopes[id.0].parent)
            .find(|id| self.scopes[id.0].values.contains_key(name))
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}
