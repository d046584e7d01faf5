//! Placeholder solvers.
//!
//! Each contest problem replaces these; the two shipped variants only sort or
//! sum the array so the surrounding read/loop/print shape can be exercised.

use crate::core::debug::DebugLog;
use crate::core::error::Result;
use crate::core::output;
use crate::core::scanner::Scanner;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Read `n` integers and print them sorted ascending on one line.
    Sort,
    /// Read `n` integers and print their sum.
    Sum,
}

/// Solve one test case. Returns the number of array values consumed.
pub fn solve_case<R: BufRead, W: Write, D: Write>(
    mode: Mode,
    scanner: &mut Scanner<R>,
    out: &mut W,
    debug: &mut DebugLog<D>,
) -> Result<usize> {
    let n: usize = scanner.next()?;
    let mut arr: Vec<i64> = scanner.next_n(n)?;
    if debug.enabled() {
        debug.log(format_args!("n={} arr={:?}", n, arr));
    }

    match mode {
        Mode::Sort => {
            arr.sort_unstable();
            writeln!(out, "{}", output::join_values(&arr))?;
        }
        Mode::Sum => {
            let total: i128 = arr.iter().map(|&x| i128::from(x)).sum();
            writeln!(out, "{}", total)?;
        }
    }
    Ok(n)
}
