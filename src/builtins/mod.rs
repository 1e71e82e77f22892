// ABOUTME: Built-in function registry, organized one family per module

pub mod arithmetic;
pub mod bindings;
pub mod io;
pub mod lists;
pub mod logic;

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Installs every built-in name listed in spec.md §4.4 into `env`.
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    lists::register(env);
    bindings::register(env);
    logic::register(env);
    io::register(env);
}

/// `'<name>' expected <k> arguments, but got <n>.`
pub fn assert_arity(name: &str, args: &[Value], expected: usize) -> Option<Value> {
    if args.len() != expected {
        Some(Value::error(format!(
            "'{name}' expected {expected} arguments, but got {}.",
            args.len()
        )))
    } else {
        None
    }
}

/// `'<name>' expected at least <k> arguments, but got <n>.`
pub fn assert_min_arity(name: &str, args: &[Value], min: usize) -> Option<Value> {
    if args.len() < min {
        Some(Value::error(format!(
            "'{name}' expected at least {min} arguments, but got {}.",
            args.len()
        )))
    } else {
        None
    }
}

/// `'<name>' expected type <T> at <i>, but got <U>.`
pub fn assert_type(name: &str, args: &[Value], index: usize, expected: &str) -> Option<Value> {
    match args.get(index) {
        Some(v) if v.type_name() == expected => None,
        Some(v) => Some(Value::error(format!(
            "'{name}' expected type {expected} at {index}, but got {}.",
            v.type_name()
        ))),
        None => Some(Value::error(format!(
            "'{name}' expected type {expected} at {index}, but got nothing."
        ))),
    }
}

/// `'<name>' can't work on empty lists`
pub fn assert_not_empty(name: &str, q: &Value) -> Option<Value> {
    match q.children() {
        Some([]) => Some(Value::error(format!("'{name}' can't work on empty lists"))),
        _ => None,
    }
}
