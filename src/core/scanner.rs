//! Whitespace tokenizer over buffered input.
//!
//! Tokens are pulled lazily one line at a time, so a count and its values
//! may sit on the same line or be spread over several. Blank lines are
//! skipped.

use crate::core::error::{CpkitError, Result};
use std::io::BufRead;
use std::str::FromStr;

const MAX_PREALLOC: usize = 1 << 16;

pub struct Scanner<R> {
    reader: R,
    /// Tokens of the current line, reversed so `pop` yields them in order.
    pending: Vec<String>,
    line: usize,
    buf: String,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            line: 0,
            buf: String::new(),
        }
    }

    /// 1-based line number of the most recently read line (0 before any read).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next token and parse it as `T`.
    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        let expected = std::any::type_name::<T>();
        let token = self.next_token(expected)?;
        token.parse::<T>().map_err(|_| CpkitError::ParseError {
            token,
            expected,
            line: self.line,
        })
    }

    /// Read exactly `n` tokens parsed as `T`.
    ///
    /// `n` usually comes from the input itself, so preallocation is capped.
    pub fn next_n<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(n.min(MAX_PREALLOC));
        for _ in 0..n {
            out.push(self.next()?);
        }
        Ok(out)
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(CpkitError::UnexpectedEof {
                    expected,
                    line: self.line,
                });
            }
            self.line += 1;
            self.pending = self.buf.split_whitespace().rev().map(String::from).collect();
        }
    }
}
