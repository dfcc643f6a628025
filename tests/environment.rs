use clex::{
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        value::core::Value,
    },
};

fn number(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn define_then_get() {
    let mut env = Environment::new();
    env.define("a", number(1.0));

    assert_eq!(env.get("a", 1).unwrap(), number(1.0));
}

#[test]
fn define_overwrites_in_same_scope() {
    let mut env = Environment::new();
    env.define("a", number(1.0));
    env.define("a", Value::from("two"));

    assert_eq!(env.get("a", 1).unwrap(), Value::from("two"));
}

#[test]
fn get_undefined_names_the_variable() {
    let env = Environment::new();
    let error = env.get("missing", 7).unwrap_err();

    assert!(matches!(&error, RuntimeError::UndefinedVariable { name, line: 7 } if name == "missing"));
    assert_eq!(error.to_string(), "Undefined variable 'missing'.");
}

#[test]
fn assign_never_creates_a_binding() {
    let mut env = Environment::new();

    assert!(env.assign("ghost", number(1.0), 3).is_err());
    assert!(env.get("ghost", 3).is_err());
}

#[test]
fn assign_overwrites_existing_binding() {
    let mut env = Environment::new();
    env.define("a", number(1.0));
    env.assign("a", number(2.0), 1).unwrap();
    env.assign("a", number(3.0), 1).unwrap();

    assert_eq!(env.get("a", 1).unwrap(), number(3.0));
}

#[test]
fn assign_reaches_enclosing_scope() {
    let mut env = Environment::new();
    env.define("a", number(1.0));

    let enclosing = env.push_scope();
    env.assign("a", number(2.0), 1).unwrap();
    env.pop_scope(enclosing);

    assert_eq!(env.get("a", 1).unwrap(), number(2.0));
}

#[test]
fn assign_targets_nearest_definition() {
    let mut env = Environment::new();
    env.define("a", number(1.0));

    let enclosing = env.push_scope();
    env.define("a", number(10.0));
    env.assign("a", number(20.0), 1).unwrap();
    assert_eq!(env.get("a", 1).unwrap(), number(20.0));
    env.pop_scope(enclosing);

    assert_eq!(env.get("a", 1).unwrap(), number(1.0));
}

#[test]
fn inner_bindings_are_discarded_on_exit() {
    let mut env = Environment::new();

    let enclosing = env.push_scope();
    env.define("local", Value::Nil);
    assert_eq!(env.get("local", 1).unwrap(), Value::Nil);
    env.pop_scope(enclosing);

    assert!(env.get("local", 1).is_err());
}

#[test]
fn lookup_walks_every_enclosing_scope() {
    let mut env = Environment::new();
    env.define("g", number(1.0));

    let global = env.push_scope();
    env.define("outer", number(2.0));
    let outer = env.push_scope();
    env.define("inner", number(3.0));

    assert_eq!(env.get("g", 1).unwrap(), number(1.0));
    assert_eq!(env.get("outer", 1).unwrap(), number(2.0));
    assert_eq!(env.get("inner", 1).unwrap(), number(3.0));
    assert_eq!(env.depth(), 3);

    env.pop_scope(outer);
    assert!(env.get("inner", 1).is_err());
    assert_eq!(env.get("outer", 1).unwrap(), number(2.0));

    env.pop_scope(global);
    assert!(env.get("outer", 1).is_err());
    assert_eq!(env.depth(), 1);
}

#[test]
fn scope_handles() {
    let mut env = Environment::new();
    assert_eq!(env.current(), ScopeId::GLOBAL);

    let enclosing = env.push_scope();
    assert_eq!(enclosing, ScopeId::GLOBAL);
    assert_ne!(env.current(), ScopeId::GLOBAL);

    env.pop_scope(enclosing);
    assert_eq!(env.current(), ScopeId::GLOBAL);
}

#[test]
fn sibling_scopes_do_not_share_bindings() {
    let mut env = Environment::new();

    let enclosing = env.push_scope();
    env.define("first", Value::Bool(true));
    env.pop_scope(enclosing);

    let enclosing = env.push_scope();
    assert!(env.get("first", 1).is_err());
    env.pop_scope(enclosing);
}
