// ABOUTME: Binding forms: def, =, and lambda construction (\)

use super::{assert_arity, assert_min_arity, assert_type};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Shared logic behind `def` (installs at global scope) and `=` (installs
/// at the current scope): the first argument is a Q-expression of symbols,
/// the remaining argument count must match, and each `si -> vi` is bound.
fn var(name: &str, env: &Rc<Environment>, mut args: Vec<Value>, global: bool) -> Value {
    if let Some(e) = assert_min_arity(name, &args, 1) {
        return e;
    }
    if let Some(e) = assert_type(name, &args, 0, "Q-Expression") {
        return e;
    }

    let symbols_val = args.remove(0);
    let symbols = symbols_val.children().unwrap();
    for s in symbols {
        if !matches!(s, Value::Symbol(_)) {
            return Value::error(format!(
                "'{name}' cannot define non-symbol. Got {}, Expected Symbol.",
                s.type_name()
            ));
        }
    }

    if symbols.len() != args.len() {
        return Value::error(format!(
            "'{name}' cannot define incorrect number of values to symbols. Got {}, Expected {}.",
            args.len(),
            symbols.len()
        ));
    }

    let names: Vec<String> = symbols
        .iter()
        .map(|s| match s {
            Value::Symbol(n) => n.clone(),
            _ => unreachable!(),
        })
        .collect();

    for (name_, value) in names.into_iter().zip(args) {
        if global {
            env.put_global(name_, value);
        } else {
            env.put(name_, value);
        }
    }

    Value::sexpr()
}

pub fn builtin_def(env: Rc<Environment>, args: Vec<Value>) -> Value {
    var("def", &env, args, true)
}

pub fn builtin_put(env: Rc<Environment>, args: Vec<Value>) -> Value {
    var("=", &env, args, false)
}

/// `\ {formals} {body}` — requires two Q-expression arguments, the first
/// containing only Symbols; builds a lambda with a fresh empty environment.
pub fn builtin_lambda(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = assert_arity("\\", &args, 2) {
        return e;
    }
    if let Some(e) = assert_type("\\", &args, 0, "Q-Expression") {
        return e;
    }
    if let Some(e) = assert_type("\\", &args, 1, "Q-Expression") {
        return e;
    }

    let formals = args.remove(0);
    let body = args.remove(0);

    if !formals.children().unwrap().iter().all(|v| matches!(v, Value::Symbol(_))) {
        return Value::error("Cannot define non-symbol. Expected Symbol.");
    }

    Value::lambda(formals, body, Environment::new())
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "def".to_string(),
        Value::builtin("def", builtin_def, Some("Defines one or more values at the global scope.")),
    );
    env.define(
        "=".to_string(),
        Value::builtin("=", builtin_put, Some("Defines one or more values at the local scope.")),
    );
    env.define(
        "\\".to_string(),
        Value::builtin("\\", builtin_lambda, Some("Constructs a user-defined lambda.")),
    );
}
