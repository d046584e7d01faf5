//! cpkit: a competitive programming boilerplate
//!
//! Two artifacts in one binary:
//!
//! - **The boilerplate runner** (`cpkit run`): read a count, read integers,
//!   call a placeholder `solve` once per test case, print the answer. The
//!   shipped solvers only sort (`--mode sort`) or sum (`--mode sum`); a real
//!   contest replaces them.
//! - **The idiom reference** (`cpkit ref`): an embedded markdown cheat-sheet
//!   covering I/O, collections, strings, math, iterators and algorithm
//!   templates. It is documentation, not a library.
//!
//! `cpkit new` writes the boilerplate into a directory before a contest.
//!
//! # Examples
//!
//! ```bash
//! # Variant A: single case, sort
//! printf '3\n3 1 2\n' | cpkit run --mode sort
//!
//! # Variant B: t cases, sum each
//! printf '2\n2\n1 1\n3\n0 0 0\n' | cpkit run --mode sum
//!
//! # Offline testing against a file, with diagnostics on stderr
//! cpkit run --input input.txt --debug
//!
//! # Read the sieve template
//! cpkit ref show algorithms#sieve-of-eratosthenes
//! ```
//!
//! # Crate Structure
//!
//! - [`crate::core`]: scanner, solvers, runner loop, config, reference and scaffolding

pub mod cli;
pub mod core;

use cli::{Cli, Command, NewCli, RunCli};
use crate::core::config::{self, RunOverrides};
use crate::core::debug::{self, DebugLog};
use crate::core::error::CpkitError;
use crate::core::scaffold::{ScaffoldOptions, scaffold_problem};
use crate::core::{ref_cli, runner};

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::time::Instant;

pub fn run() -> Result<(), CpkitError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Run(args) => run_boilerplate(args),
        Command::New(args) => run_new(args),
        Command::Ref(args) => ref_cli::run_ref_cli(args),
    }
}

fn run_boilerplate(args: RunCli) -> Result<(), CpkitError> {
    let current_dir = std::env::current_dir()?;
    let (cfg, cfg_dir) = config::load_config(args.config.as_deref(), &current_dir)?;
    let env_debug = debug::env_flag(std::env::var(debug::DEBUG_ENV).ok().as_deref());
    let overrides = RunOverrides {
        mode: args.mode,
        cases: args.cases,
        input: args.input,
        debug: args.debug,
    };
    let resolved = config::resolve(&cfg, cfg_dir.as_deref(), &overrides, env_debug);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut dbg = DebugLog::new(resolved.debug, io::stderr().lock());
    let started = Instant::now();

    let summary = match &resolved.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    CpkitError::NotFound(format!("input file {}", path.display()))
                }
                _ => CpkitError::IoError(e),
            })?;
            dbg.log(format_args!("reading {}", path.display()));
            runner::run(resolved.options, BufReader::new(file), &mut out, &mut dbg)?
        }
        None => runner::run(resolved.options, io::stdin().lock(), &mut out, &mut dbg)?,
    };

    dbg.log(format_args!(
        "solved {} case(s), {} value(s) in {:.2?}",
        summary.cases,
        summary.values,
        started.elapsed()
    ));
    Ok(())
}

fn run_new(args: NewCli) -> Result<(), CpkitError> {
    let target_dir = match args.dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    scaffold_problem(&ScaffoldOptions {
        target_dir,
        force: args.force,
        dry_run: args.dry_run,
    })
}
