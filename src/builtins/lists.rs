// ABOUTME: Q-expression operations: list, head, tail, join, eval

use super::{assert_arity, assert_min_arity, assert_not_empty, assert_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// Retag the argument S-expression as a Q-expression.
pub fn builtin_list(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    Value::Sexpr(args).retag_qexpr()
}

/// Require one non-empty Q-expression; return a Q-expression of its head.
pub fn builtin_head(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = assert_arity("head", &args, 1) {
        return e;
    }
    if let Some(e) = assert_type("head", &args, 0, "Q-Expression") {
        return e;
    }
    if let Some(e) = assert_not_empty("head", &args[0]) {
        return e;
    }
    let q = args.remove(0);
    let first = q.take(0);
    Value::Qexpr(vec![first])
}

/// Require one non-empty Q-expression; return it without its first element.
pub fn builtin_tail(_env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = assert_arity("tail", &args, 1) {
        return e;
    }
    if let Some(e) = assert_type("tail", &args, 0, "Q-Expression") {
        return e;
    }
    if let Some(e) = assert_not_empty("tail", &args[0]) {
        return e;
    }
    let mut q = args.remove(0);
    q.pop(0);
    q
}

/// Require one Q-expression; retag it as an S-expression and evaluate.
pub fn builtin_eval(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = assert_arity("eval", &args, 1) {
        return e;
    }
    if let Some(e) = assert_type("eval", &args, 0, "Q-Expression") {
        return e;
    }
    let q = args.remove(0);
    eval(env, q.retag_sexpr())
}

/// Require every argument be a Q-expression; concatenate them, in order.
pub fn builtin_join(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if let Some(e) = assert_min_arity("join", &args, 1) {
        return e;
    }
    for i in 0..args.len() {
        if let Some(e) = assert_type("join", &args, i, "Q-Expression") {
            return e;
        }
    }
    let mut iter = args.into_iter();
    let mut acc = iter.next().unwrap();
    for next in iter {
        acc = acc.join(next);
    }
    acc
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "list".to_string(),
        Value::builtin("list", builtin_list, Some("Turns its arguments into a Q-expression.")),
    );
    env.define(
        "head".to_string(),
        Value::builtin("head", builtin_head, Some("Returns the first element of a Q-expression.")),
    );
    env.define(
        "tail".to_string(),
        Value::builtin("tail", builtin_tail, Some("Returns a Q-expression without its first element.")),
    );
    env.define(
        "eval".to_string(),
        Value::builtin("eval", builtin_eval, Some("Evaluates a Q-expression as an S-expression.")),
    );
    env.define(
        "join".to_string(),
        Value::builtin("join", builtin_join, Some("Concatenates one or more Q-expressions.")),
    );
}
