// ABOUTME: Reader — nom combinators parsing source text into Values

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, multispace1, none_of},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};

use crate::error::ReaderError;
use crate::value::Value;

// Grammar (SPEC_FULL.md §4.5 / spec.md §6):
//
// number  : optional '-' then one or more decimal digits
// string  : single-quoted, C-style escapes inside
// comment : ';' to end of line (discarded)
// symbol  : one or more of [A-Za-z0-9_+-*/\=<>!:,&]
// sexpr   : '(' expr* ')'
// qexpr   : '{' expr* '}'
// expr    : number | string | comment | symbol | sexpr | qexpr
// program : expr*

fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(char(';'), take_while(|c| c != '\n'))).parse(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment)))).parse(input)
}

fn number(input: &str) -> IResult<&str, Value> {
    map(recognize(pair(opt(char('-')), digit1)), |digits: &str| {
        match digits.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::error("Invalid number"),
        }
    })
    .parse(input)
}

fn string_escape(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            value('\n', char('n')),
            value('\t', char('t')),
            value('\r', char('r')),
            value('\\', char('\\')),
            value('\'', char('\'')),
        )),
    )
    .parse(input)
}

fn string_char(input: &str) -> IResult<&str, char> {
    alt((string_escape, none_of("'"))).parse(input)
}

fn string(input: &str) -> IResult<&str, Value> {
    map(
        delimited(char('\''), many0(string_char), char('\'')),
        |chars: Vec<char>| Value::String(chars.into_iter().collect()),
    )
    .parse(input)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!:,&".contains(c)
}

fn symbol(input: &str) -> IResult<&str, Value> {
    map(take_while1(is_symbol_char), |s: &str| {
        Value::Symbol(s.to_string())
    })
    .parse(input)
}

fn sexpr(input: &str) -> IResult<&str, Value> {
    map(
        delimited(char('('), many0(expr_ws), char(')')),
        Value::Sexpr,
    )
    .parse(input)
}

fn qexpr(input: &str) -> IResult<&str, Value> {
    map(
        delimited(char('{'), many0(expr_ws), char('}')),
        Value::Qexpr,
    )
    .parse(input)
}

fn expr(input: &str) -> IResult<&str, Value> {
    alt((number, string, sexpr, qexpr, symbol)).parse(input)
}

/// An expression preceded by whitespace/comments.
fn expr_ws(input: &str) -> IResult<&str, Value> {
    preceded(ws, expr).parse(input)
}

/// True if `input` contains an opening `'` with no matching unescaped
/// closing `'` — i.e. a string literal that never terminates.
fn has_unterminated_string(input: &str) -> bool {
    let mut chars = input.chars();
    let mut in_string = false;
    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '\'' => in_string = false,
                _ => {}
            }
        } else if c == '\'' {
            in_string = true;
        }
    }
    in_string
}

/// Parse every top-level expression in one source text.
pub fn parse_program(input: &str) -> Result<Vec<Value>, ReaderError> {
    let (rest, exprs) = many0(expr_ws).parse(input).map_err(|e| {
        if has_unterminated_string(input) {
            ReaderError::UnterminatedString
        } else {
            ReaderError::Syntax(e.to_string())
        }
    })?;
    let (rest, _) = ws(rest).map_err(|e| ReaderError::Syntax(e.to_string()))?;
    if !rest.is_empty() {
        if has_unterminated_string(rest) {
            return Err(ReaderError::UnterminatedString);
        }
        if rest.contains(['(', '{']) && !rest.contains([')', '}']) {
            return Err(ReaderError::Unbalanced);
        }
        return Err(ReaderError::Syntax(format!("trailing input: {rest:?}")));
    }
    Ok(exprs)
}

/// Parse exactly one expression, as used by the REPL for a single line.
pub fn parse_one(input: &str) -> Result<Value, ReaderError> {
    let (after_ws, _) = ws(input).map_err(|e| ReaderError::Syntax(e.to_string()))?;
    if after_ws.is_empty() {
        return Err(ReaderError::UnexpectedEof);
    }
    let (rest, value) = expr_ws(input).map_err(|e| {
        if has_unterminated_string(input) {
            ReaderError::UnterminatedString
        } else {
            ReaderError::Syntax(e.to_string())
        }
    })?;
    let (rest, _) = ws(rest).map_err(|e| ReaderError::Syntax(e.to_string()))?;
    if !rest.is_empty() {
        if has_unterminated_string(rest) {
            return Err(ReaderError::UnterminatedString);
        }
        return Err(ReaderError::Syntax(format!("trailing input: {rest:?}")));
    }
    Ok(value)
}
