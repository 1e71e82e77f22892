// ABOUTME: Reader-level error type for syntactically malformed input

use thiserror::Error;

/// The only place a Rust `Result` appears in this crate: a syntactically
/// malformed top-level form has no `Value` to become an `Error` inside of,
/// so it is surfaced here instead (SPEC_FULL.md §4.5/§4.8).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unbalanced parentheses")]
    Unbalanced,

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("could not parse: {0}")]
    Syntax(String),
}
