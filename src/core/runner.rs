//! Test-case loop: read `t` (multi mode) or assume one case, then solve each.

use crate::core::debug::DebugLog;
use crate::core::error::Result;
use crate::core::scanner::Scanner;
use crate::core::solve::{self, Mode};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Cases {
    /// Exactly one test case; no count is read.
    Single,
    /// First token is the number of test cases.
    Multi,
}

impl Cases {
    /// Sorting ships as a single-case script, summing as a multi-case one.
    pub fn default_for(mode: Mode) -> Self {
        match mode {
            Mode::Sort => Cases::Single,
            Mode::Sum => Cases::Multi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    pub cases: Cases,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            cases: Cases::default_for(mode),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub cases: usize,
    pub values: usize,
}

/// Run every test case from `input`, writing answers to `output`.
///
/// Answers for cases solved before an error stay written.
pub fn run<R: BufRead, W: Write, D: Write>(
    opts: RunOptions,
    input: R,
    output: &mut W,
    debug: &mut DebugLog<D>,
) -> Result<RunSummary> {
    let mut scanner = Scanner::new(input);
    let t: usize = match opts.cases {
        Cases::Single => 1,
        Cases::Multi => scanner.next()?,
    };
    debug.log(format_args!("mode={:?} cases={}", opts.mode, t));

    let mut summary = RunSummary {
        cases: 0,
        values: 0,
    };
    for case in 1..=t {
        debug.log(format_args!("case #{}", case));
        let consumed = solve::solve_case(opts.mode, &mut scanner, output, debug);
        match consumed {
            Ok(n) => {
                summary.cases += 1;
                summary.values += n;
            }
            Err(e) => {
                output.flush()?;
                return Err(e);
            }
        }
    }
    output.flush()?;
    Ok(summary)
}
