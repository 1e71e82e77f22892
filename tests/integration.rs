// ABOUTME: End-to-end tests driving the public parse->eval pipeline

use lithp::env::Environment;
use lithp::eval::eval;
use lithp::parser::{parse_one, parse_program};
use std::rc::Rc;

fn fresh_env() -> Rc<Environment> {
    let env = Environment::new();
    lithp::builtins::register_builtins(&env);
    env
}

fn run(env: &Rc<Environment>, src: &str) -> String {
    eval(env.clone(), parse_one(src).unwrap()).to_string()
}

fn run_program(env: &Rc<Environment>, src: &str) -> Vec<String> {
    parse_program(src)
        .unwrap()
        .into_iter()
        .map(|form| eval(env.clone(), form).to_string())
        .collect()
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_eq!(run(&fresh_env(), "(+ 1 2 3)"), "6");
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(run(&fresh_env(), "(/ 10 0)"), "Error: Division by Zero!");
}

#[test]
fn head_returns_singleton_qexpr() {
    assert_eq!(run(&fresh_env(), "(head {1 2 3})"), "{1}");
}

#[test]
fn def_then_reference_across_forms() {
    let env = fresh_env();
    let outputs = run_program(&env, "(def {x} 10) (+ x 5)");
    assert_eq!(outputs, vec!["".to_string(), "15".to_string()]);
}

#[test]
fn local_binding_defines_closure_usable_function() {
    let env = fresh_env();
    let outputs = run_program(&env, "(= {f} (\\ {a b} {+ a b})) (f 2 3)");
    assert_eq!(outputs, vec!["".to_string(), "5".to_string()]);
}

#[test]
fn rest_args_collect_remaining_into_qexpr() {
    assert_eq!(
        run(&fresh_env(), "((\\ {a : rest} {rest}) 1 2 3 4)"),
        "{2 3 4}"
    );
}

#[test]
fn if_picks_branch_by_predicate() {
    assert_eq!(
        run(&fresh_env(), "(if (== 1 1) {head {7 8}} {head {9 0}})"),
        "{7}"
    );
}

#[test]
fn unbound_symbol_is_a_propagating_error() {
    assert_eq!(run(&fresh_env(), "undefined_name"), "Error: Unbound symbol 'undefined_name'!");
}

#[test]
fn error_short_circuits_sibling_evaluation() {
    // `missing` is unbound; its sibling `(/ 1 0)` is never reached because
    // the first error encountered wins.
    assert_eq!(run(&fresh_env(), "(+ missing (/ 1 0))"), "Error: Unbound symbol 'missing'!");
}

#[test]
fn partial_application_then_full_application() {
    let env = fresh_env();
    run_program(&env, "(= {add} (\\ {x y} {+ x y}))");
    let partial = run(&env, "(add 1)");
    assert!(partial.starts_with("(\\"));
    assert_eq!(run(&env, "((add 1) 41)"), "42");
}

#[test]
fn too_many_arguments_without_rest_marker_is_error() {
    let env = fresh_env();
    run_program(&env, "(= {id} (\\ {a} {a}))");
    assert_eq!(run(&env, "(id 1 2)"), "Error: Function passed too many arguments.");
}

#[test]
fn import_evaluates_every_top_level_form_in_a_file() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("lithp_integration_{}.lithp", std::process::id()));
    std::fs::write(&path, "(def {answer} 42)\n(def {double_answer} (* answer 2))").unwrap();

    let env = fresh_env();
    let result = run(
        &env,
        &format!("(import '{}')", path.to_string_lossy()),
    );
    assert_eq!(result, "");
    assert_eq!(run(&env, "double_answer"), "84");

    std::fs::remove_file(&path).ok();
}

#[test]
fn equality_is_structural_across_list_values() {
    assert_eq!(run(&fresh_env(), "(== {1 2 3} {1 2 3})"), "1");
    assert_eq!(run(&fresh_env(), "(!= {1 2 3} {1 2 4})"), "1");
}

#[test]
fn string_literal_round_trips_through_printer() {
    assert_eq!(run(&fresh_env(), "'hi there'"), "'hi there'");
}

#[test]
fn comments_are_discarded_by_the_reader() {
    let env = fresh_env();
    assert_eq!(run(&env, "(+ 1 2) ; this adds two numbers"), "3");
}
