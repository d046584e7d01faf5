//! CLI struct definitions for the cpkit command-line interface.
//!
//! All clap-derived types live here except the `ref` family, which sits with
//! its handler in `core::ref_cli`. Dispatch logic lives in `lib.rs`.

use crate::core::ref_cli::RefCli;
use crate::core::runner::Cases;
use crate::core::solve::Mode;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "cpkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Competitive programming boilerplate: read cases, solve, print. Ships an idiom reference."
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RunCli {
    /// Placeholder solver to run (defaults to `run.mode` in cpkit.toml, then `sort`).
    #[clap(long, value_enum)]
    pub mode: Option<Mode>,
    /// Whether the first token is a test-case count.
    #[clap(long, value_enum)]
    pub cases: Option<Cases>,
    /// Read input from this file instead of stdin.
    #[clap(short, long)]
    pub input: Option<PathBuf>,
    /// Config file (defaults to ./cpkit.toml when present).
    #[clap(long)]
    pub config: Option<PathBuf>,
    /// Print DEBUG: lines to stderr.
    #[clap(long)]
    pub debug: bool,
}

#[derive(clap::Args, Debug)]
pub(crate) struct NewCli {
    /// Directory to scaffold into (defaults to current working directory).
    #[clap(short, long)]
    pub dir: Option<PathBuf>,
    /// Overwrite existing files.
    #[clap(long)]
    pub force: bool,
    /// Show what would change without writing files.
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Run the boilerplate over stdin (or --input) and print answers.
    Run(RunCli),
    /// Write a solution skeleton, cpkit.toml and input.txt.
    New(NewCli),
    /// Browse the embedded idiom reference.
    #[clap(name = "ref")]
    Ref(RefCli),
    /// Print the version.
    Version,
}
