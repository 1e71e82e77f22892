// ABOUTME: Syntax highlighter for the REPL
// Implements rustyline's Highlighter trait, colorizing parens/braces, the
// built-in symbol set, numbers, strings, and comments.

use rustyline::completion::Completer;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;
use std::collections::HashSet;

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_PARENS: &str = "\x1b[1;34m";
const COLOR_BUILTIN: &str = "\x1b[36m";
const COLOR_NUMBER: &str = "\x1b[33m";
const COLOR_STRING: &str = "\x1b[32m";
const COLOR_COMMENT: &str = "\x1b[90m";

pub struct LispHelper;

impl LispHelper {
    pub fn new() -> Self {
        LispHelper
    }
}

impl Default for LispHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for LispHelper {}

impl Completer for LispHelper {
    type Candidate = String;
}

impl Hinter for LispHelper {
    type Hint = String;
}

impl Validator for LispHelper {}

impl Highlighter for LispHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line, &builtins());
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

/// Every name `register_builtins` installs in the global environment
/// (spec.md §4.4); kept in sync manually since there is no registry to
/// introspect.
fn builtins() -> HashSet<&'static str> {
    [
        "+", "-", "*", "/", "list", "head", "tail", "eval", "join", "def", "=", "\\", "if", "==",
        "!=", "<", "<=", ">", ">=", "print", "error", "import",
    ]
    .into_iter()
    .collect()
}

fn highlight_line(line: &str, builtins: &HashSet<&'static str>) -> String {
    let mut result = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ';' => {
                result.push_str(COLOR_COMMENT);
                while i < chars.len() && chars[i] != '\n' {
                    result.push(chars[i]);
                    i += 1;
                }
                result.push_str(COLOR_RESET);
            }

            '\'' => {
                result.push_str(COLOR_STRING);
                result.push('\'');
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        result.push(chars[i]);
                        result.push(chars[i + 1]);
                        i += 2;
                    } else if chars[i] == '\'' {
                        result.push('\'');
                        i += 1;
                        break;
                    } else {
                        result.push(chars[i]);
                        i += 1;
                    }
                }
                result.push_str(COLOR_RESET);
            }

            '(' | ')' | '{' | '}' => {
                result.push_str(COLOR_PARENS);
                result.push(chars[i]);
                i += 1;
                result.push_str(COLOR_RESET);
            }

            c if c.is_whitespace() => {
                result.push(c);
                i += 1;
            }

            _ => {
                let start = i;
                while i < chars.len()
                    && !chars[i].is_whitespace()
                    && !"(){}'\"".contains(chars[i])
                {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                if is_number(&token) {
                    result.push_str(COLOR_NUMBER);
                    result.push_str(&token);
                    result.push_str(COLOR_RESET);
                } else if builtins.contains(token.as_str()) {
                    result.push_str(COLOR_BUILTIN);
                    result.push_str(&token);
                    result.push_str(COLOR_RESET);
                } else {
                    result.push_str(&token);
                }
            }
        }
    }

    result
}

fn is_number(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
