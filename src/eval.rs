// ABOUTME: Evaluator — S-expression reduction and the function call protocol

use crate::env::Environment;
use crate::value::{Function, Value};
use std::rc::Rc;

/// `eval(env, v)` per spec.md §4.3.
pub fn eval(env: Rc<Environment>, v: Value) -> Value {
    match v {
        Value::Symbol(name) => env.get(&name),
        Value::Sexpr(_) => eval_sexpr(env, v),
        other => other,
    }
}

/// The five-step S-expression reduction algorithm (spec.md §4.3).
fn eval_sexpr(env: Rc<Environment>, v: Value) -> Value {
    let children = match v {
        Value::Sexpr(cs) => cs,
        other => return other,
    };

    if children.is_empty() {
        return Value::Sexpr(children);
    }

    let mut evaluated: Vec<Value> = children
        .into_iter()
        .map(|c| eval(env.clone(), c))
        .collect();

    if let Some(i) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(i);
    }

    if evaluated.len() == 1 {
        return evaluated.into_iter().next().unwrap();
    }

    let mut rest = Value::Sexpr(evaluated);
    let f = rest.pop(0);

    match f {
        Value::Function(func) => call(env, func, rest),
        _ => Value::error("First element is not a function!"),
    }
}

/// The call protocol (spec.md §4.4): builtins dispatch directly; lambdas
/// bind formals one at a time, supporting partial application and the `:`
/// rest-marker.
pub fn call(env: Rc<Environment>, f: Function, args: Value) -> Value {
    let args_children = match args {
        Value::Sexpr(cs) => cs,
        other => return other,
    };

    match f {
        Function::Builtin { func, .. } => func(env, args_children),
        Function::Lambda {
            env: lambda_env,
            mut formals,
            body,
        } => {
            let mut args_iter = args_children.into_iter();

            while let Some(arg) = args_iter.next() {
                let formals_children = formals
                    .children_mut()
                    .expect("lambda formals is always a Qexpr");
                if formals_children.is_empty() {
                    return Value::error("Function passed too many arguments.");
                }
                let sym = formals.pop(0);
                let Value::Symbol(name) = sym else {
                    return Value::error("Invalid function format. Formals must be symbols.");
                };

                if name == ":" {
                    let formals_children = formals
                        .children_mut()
                        .expect("lambda formals is always a Qexpr");
                    if formals_children.len() != 1 {
                        return Value::error(
                            "Invalid function format. ':' should be followed by a single symbol.",
                        );
                    }
                    let rest_sym = formals.pop(0);
                    let Value::Symbol(rest_name) = rest_sym else {
                        return Value::error(
                            "Invalid function format. ':' should be followed by a single symbol.",
                        );
                    };
                    let mut remaining = vec![arg];
                    remaining.extend(args_iter);
                    let rest_list = Value::Qexpr(remaining);
                    lambda_env.put(rest_name, rest_list);
                    formals = Box::new(Value::qexpr());
                    break;
                }

                lambda_env.put(name, arg);
            }

            let formals_empty = formals.children().map(|c| c.is_empty()).unwrap_or(false);

            if formals_empty {
                lambda_env.set_parent(env);
                let body_copy = (*body).clone();
                eval(lambda_env, body_copy.retag_sexpr())
            } else {
                Value::Function(Function::Lambda {
                    env: lambda_env,
                    formals,
                    body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_one;

    fn eval_str(env: Rc<Environment>, src: &str) -> Value {
        eval(env, parse_one(src).unwrap())
    }

    fn env_with_builtins() -> Rc<Environment> {
        let env = Environment::new();
        crate::builtins::register_builtins(&env);
        env
    }

    #[test]
    fn self_evaluating_values() {
        let env = Environment::new();
        assert!(matches!(eval(env.clone(), Value::Number(5)), Value::Number(5)));
        let q = Value::Qexpr(vec![Value::Number(1)]);
        assert!(eval(env, q.clone()).equals(&q));
    }

    #[test]
    fn empty_sexpr_evaluates_to_itself() {
        let env = Environment::new();
        let v = eval(env, Value::sexpr());
        assert!(matches!(v, Value::Sexpr(ref c) if c.is_empty()));
    }

    #[test]
    fn symbol_lookup_miss_is_error() {
        let env = Environment::new();
        match eval(env, Value::Symbol("x".into())) {
            Value::Error(msg) => assert_eq!(msg, "Unbound symbol 'x'!"),
            _ => panic!("expected Error"),
        }
    }

    #[test]
    fn error_short_circuits_reduction() {
        let env = env_with_builtins();
        let v = eval_str(env, "(+ 1 x)");
        assert!(matches!(v, Value::Error(_)));
    }

    #[test]
    fn arithmetic_and_list_ops() {
        let env = env_with_builtins();
        assert_eq!(eval_str(env.clone(), "(+ 1 2 3)").to_string(), "6");
        assert_eq!(eval_str(env.clone(), "(head {1 2 3})").to_string(), "{1}");
        assert_eq!(
            eval_str(env, "(eval (tail {junk + 1 2}))").to_string(),
            "3"
        );
    }

    #[test]
    fn def_then_use() {
        let env = env_with_builtins();
        eval_str(env.clone(), "(def {x} 10)");
        assert_eq!(eval_str(env, "(+ x 5)").to_string(), "15");
    }

    #[test]
    fn lambda_full_application() {
        let env = env_with_builtins();
        eval_str(env.clone(), "(= {f} (\\ {a b} {+ a b}))");
        assert_eq!(eval_str(env, "(f 2 3)").to_string(), "5");
    }

    #[test]
    fn lambda_partial_application_returns_function() {
        let env = env_with_builtins();
        eval_str(env.clone(), "(= {f} (\\ {a b} {+ a b}))");
        let partial = eval_str(env.clone(), "(f 2)");
        assert!(matches!(partial, Value::Function(_)));
        assert_eq!(eval_str(env, "((f 2) 3)").to_string(), "5");
    }

    #[test]
    fn rest_argument_binding() {
        let env = env_with_builtins();
        let v = eval_str(env, "((\\ {a : rest} {rest}) 1 2 3 4)");
        assert_eq!(v.to_string(), "{2 3 4}");
    }

    #[test]
    fn too_many_arguments_is_error() {
        let env = env_with_builtins();
        eval_str(env.clone(), "(= {f} (\\ {a} {a}))");
        match eval_str(env, "(f 1 2)") {
            Value::Error(msg) => assert_eq!(msg, "Function passed too many arguments."),
            other => panic!("expected Error, got {other}"),
        }
    }

    #[test]
    fn curry_via_partial_application() {
        let env = env_with_builtins();
        eval_str(env.clone(), "(= {add} (\\ {x y} {+ x y}))");
        eval_str(env.clone(), "(= {add5} (add 5))");
        assert_eq!(eval_str(env, "(add5 10)").to_string(), "15");
    }

    #[test]
    fn if_conditional() {
        let env = env_with_builtins();
        let v = eval_str(env, "(if (== 1 1) {head {7 8}} {head {9 0}})");
        assert_eq!(v.to_string(), "{7}");
    }

    #[test]
    fn not_a_function_head() {
        let env = Environment::new();
        let v = eval_str(env, "(1 2)");
        match v {
            Value::Error(msg) => assert_eq!(msg, "First element is not a function!"),
            other => panic!("expected Error, got {other}"),
        }
    }
}
