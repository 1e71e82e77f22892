// ABOUTME: Arithmetic operators: + - * /

use super::assert_min_arity;
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Shared numeric-fold used by `+ - * /` (spec.md §4.4). All arguments must
/// be Numbers; unary `-` negates, the other three return a lone argument
/// unchanged; division by zero is an Error, not a panic. `fold` wraps on
/// overflow rather than panicking, matching the plain `long` arithmetic in
/// `original_source/src/builtins.c` (`builtin_op`), which silently wraps
/// instead of trapping.
fn op_wrapping(name: &str, args: Vec<Value>, fold: impl Fn(i64, i64) -> Option<i64>) -> Value {
    if let Some(e) = assert_min_arity(name, &args, 1) {
        return e;
    }
    if !args.iter().all(|v| matches!(v, Value::Number(_))) {
        return Value::error("Can only operate on numbers!");
    }

    let mut nums = args.into_iter().map(|v| match v {
        Value::Number(n) => n,
        _ => unreachable!(),
    });
    let first = nums.next().unwrap();
    let rest: Vec<i64> = nums.collect();

    if rest.is_empty() {
        return match name {
            "-" => Value::Number(first.wrapping_neg()),
            _ => Value::Number(first),
        };
    }

    let mut acc = first;
    for n in rest {
        match fold(acc, n) {
            Some(r) => acc = r,
            None => return Value::error("Division by Zero!"),
        }
    }
    Value::Number(acc)
}

pub fn builtin_add(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    op_wrapping("+", args, |a, b| Some(a.wrapping_add(b)))
}

pub fn builtin_sub(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    op_wrapping("-", args, |a, b| Some(a.wrapping_sub(b)))
}

pub fn builtin_mul(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    op_wrapping("*", args, |a, b| Some(a.wrapping_mul(b)))
}

pub fn builtin_div(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    op_wrapping("/", args, |a, b| {
        if b == 0 {
            None
        } else {
            Some(a.wrapping_div(b))
        }
    })
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "+".to_string(),
        Value::builtin("+", builtin_add, Some("Sum of all arguments.")),
    );
    env.define(
        "-".to_string(),
        Value::builtin(
            "-",
            builtin_sub,
            Some("Difference, or negation with one argument."),
        ),
    );
    env.define(
        "*".to_string(),
        Value::builtin("*", builtin_mul, Some("Product of all arguments.")),
    );
    env.define(
        "/".to_string(),
        Value::builtin("/", builtin_div, Some("Truncating integer division.")),
    );
}
