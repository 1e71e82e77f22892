mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod highlighter;
mod parser;
mod value;

use clap::Parser;
use env::Environment;
use eval::eval;
use highlighter::LispHelper;
use parser::parse_one;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::rc::Rc;
use value::Value;

/// Lithp: a small Lisp-family interpreter
#[derive(Parser, Debug)]
#[command(name = "lithp")]
#[command(version = config::VERSION)]
#[command(about = "A small Lisp-family interpreter")]
struct CliArgs {
    /// Source files to import and evaluate (if none given, starts the REPL)
    #[arg(value_name = "FILE")]
    scripts: Vec<PathBuf>,
}

fn main() {
    let args = CliArgs::parse();

    let env = Environment::new();
    builtins::register_builtins(&env);

    if !args.scripts.is_empty() {
        run_scripts(&args.scripts, env);
        return;
    }

    run_repl(env);
}

/// One or more positional arguments: each is imported in order (spec.md
/// §6). Errors are printed but do not stop the remaining paths.
fn run_scripts(paths: &[PathBuf], env: Rc<Environment>) {
    for path in paths {
        let args = vec![Value::String(path.to_string_lossy().into_owned())];
        let result = builtins::io::builtin_import(env.clone(), args);
        if let Value::Error(_) = &result {
            println!("{result}");
        }
    }
}

fn run_repl(env: Rc<Environment>) {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl: Editor<LispHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).expect("failed to initialize REPL");
    rl.set_helper(Some(LispHelper::new()));

    let history_file = ".lithp_history";
    let _ = rl.load_history(history_file);

    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);

    loop {
        match rl.readline("lithp> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_one(&line) {
                    Ok(expr) => {
                        let result = eval(env.clone(), expr);
                        print_result(&result);
                    }
                    Err(e) => eprintln!("Parse error: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C exits the process (spec.md §6).
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
}

/// Prints a top-level result the way `lval_println` does (spec.md §4.1,
/// `examples/original_source/src/lval.c:306-312`): the trailing newline is
/// suppressed entirely for an empty S-expression result.
fn print_result(result: &Value) {
    match result {
        Value::Sexpr(cs) if cs.is_empty() => print!("{result}"),
        _ => println!("{result}"),
    }
    let _ = std::io::Write::flush(&mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_scripts_reports_missing_file_and_continues() {
        let env = Environment::new();
        builtins::register_builtins(&env);
        run_scripts(&[PathBuf::from("/nonexistent/one.lithp")], env);
    }

    #[test]
    fn run_scripts_evaluates_each_path() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("lithp_main_test_{}.lithp", std::process::id()));
        std::fs::write(&path, "(def {x} 1)").unwrap();

        let env = Environment::new();
        builtins::register_builtins(&env);
        run_scripts(std::slice::from_ref(&path), env.clone());
        assert!(matches!(env.get("x"), Value::Number(1)));

        std::fs::remove_file(&path).ok();
    }
}
