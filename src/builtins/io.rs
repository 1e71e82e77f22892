// ABOUTME: I/O built-ins: print, error, import

use super::assert_type;
use crate::env::Environment;
use crate::eval::eval;
use crate::parser::parse_program;
use crate::value::Value;
use std::rc::Rc;

/// Prints each argument separated by spaces, followed by a newline.
pub fn builtin_print(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
    Value::sexpr()
}

/// Requires one String argument; wraps it as an Error value.
pub fn builtin_error(_env: Rc<Environment>, args: Vec<Value>) -> Value {
    if let Some(e) = super::assert_arity("error", &args, 1) {
        return e;
    }
    if let Some(e) = assert_type("error", &args, 0, "String") {
        return e;
    }
    match &args[0] {
        Value::String(s) => Value::error(s.clone()),
        _ => unreachable!(),
    }
}

/// Requires one String path. Parses and evaluates every top-level form in
/// the file; Error results are printed but do not stop the loop (spec.md
/// §4.4). Returns the empty S-expression, or an Error if the file could not
/// be read or parsed.
pub fn builtin_import(env: Rc<Environment>, args: Vec<Value>) -> Value {
    if let Some(e) = super::assert_arity("import", &args, 1) {
        return e;
    }
    if let Some(e) = assert_type("import", &args, 0, "String") {
        return e;
    }
    let path = match &args[0] {
        Value::String(s) => s.clone(),
        _ => unreachable!(),
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => return Value::error(format!("Could not load Library {path}: {e}")),
    };

    let forms = match parse_program(&contents) {
        Ok(forms) => forms,
        Err(e) => return Value::error(format!("Could not load Library {path}: {e}")),
    };

    for form in forms {
        let result = eval(env.clone(), form);
        if let Value::Error(_) = &result {
            println!("{result}");
        }
    }

    Value::sexpr()
}

pub fn register(env: &Rc<Environment>) {
    env.define(
        "print".to_string(),
        Value::builtin("print", builtin_print, Some("Prints its arguments separated by spaces.")),
    );
    env.define(
        "error".to_string(),
        Value::builtin("error", builtin_error, Some("Wraps a String as an Error value.")),
    );
    env.define(
        "import".to_string(),
        Value::builtin("import", builtin_import, Some("Loads and evaluates a Lithp source file.")),
    );
}
