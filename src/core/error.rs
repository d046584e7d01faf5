use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpkitError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("line {line}: cannot parse {token:?} as {expected}")]
    ParseError {
        token: String,
        expected: &'static str,
        line: usize,
    },
    #[error("line {line}: unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str, line: usize },
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid pattern: {0}")]
    RegexError(#[from] regex::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CpkitError>;
