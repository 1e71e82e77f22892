// ABOUTME: Conditionals and comparisons: if, ==, !=, <, <=, >, >=

use super::{assert_arity, assert_type};
use crate::env::Environment;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// `if n {then} {else}` — requires a Number predicate and two Q-expression
/// branches. The chosen branch is retagged to an S-expression and evaluated.
pub fn builtin_if(env: Rc<Environment>, mut args: Vec<Value>) -> Value {
    if let Some(e) = assert_arity("if", &args, 3) {
        return e;
    }
    if let Some(e) = assert_type("if", &args, 0, "Number") {
        return e;
    }
    if let Some(e) = assert_type("if", &args, 1, "Q-Expression") {
        return e;
    }
    if let Some(e) = assert_type("if", &args, 2, "Q-Expression") {
        return e;
    }

    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let predicate = args.remove(0);

    let truthy = matches!(predicate, Value::Number(n) if n != 0);
    let chosen = if truthy { then_branch } else { else_branch };
    eval(env, chosen.retag_sexpr())
}

fn ordering(name: &str, args: Vec<Value>, cmp: impl Fn(i64, i64) -> bool) -> Value {
    if let Some(e) = assert_arity(name, &args, 2) {
        return e;
    }
    if let Some(e) = assert_type(name, &args, 0, "Number") {
        return e;
    }
    if let Some(e) = assert_type(name, &args, 1, "Number") {
        return e;
    }
    let (Value::Number(a), Value::Number(b)) = (&args[0], &args[1]) else {
        unreachable!()
    };
    Value::Number(cmp(*a, *b) as i64)
}

pub fn builtin_gt(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    ordering(">", args, |a, b| a > b)
}

pub fn builtin_lt(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    ordering("<", args, |a, b| a < b)
}

pub fn builtin_ge(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    ordering(">=", args, |a, b| a >= b)
}

pub fn builtin_le(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    ordering("<=", args, |a, b| a <= b)
}

/// `== !=` accept any two values and compare structurally (spec.md §4.4).
fn cmp(name: &str, args: Vec<Value>, negate: bool) -> Value {
    if let Some(e) = assert_arity(name, &args, 2) {
        return e;
    }
    let eq = args[0].equals(&args[1]);
    Value::Number((eq != negate) as i64)
}

pub fn builtin_eq(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    cmp("==", args, false)
}

pub fn builtin_ne(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    cmp("!=", args, true)
}

pub fn register(env: &Rc<Environment>) {
    env.define("if".to_string(), Value::builtin("if", builtin_if, Some("Chooses a branch based on a Number predicate.")));
    env.define(">".to_string(), Value::builtin(">", builtin_gt, Some("Strictly greater than.")));
    env.define("<".to_string(), Value::builtin("<", builtin_lt, Some("Strictly less than.")));
    env.define(">=".to_string(), Value::builtin(">=", builtin_ge, Some("Greater than or equal.")));
    env.define("<=".to_string(), Value::builtin("<=", builtin_le, Some("Less than or equal.")));
    env.define("==".to_string(), Value::builtin("==", builtin_eq, Some("Structural equality.")));
    env.define("!=".to_string(), Value::builtin("!=", builtin_ne, Some("Structural inequality.")));
}
