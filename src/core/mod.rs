//! Core modules for cpkit: the read/solve/print pipeline and its supports.

pub mod assets;
pub mod config;
pub mod debug;
pub mod error;
pub mod output;
pub mod ref_cli;
pub mod reference;
pub mod runner;
pub mod scaffold;
pub mod scanner;
pub mod solve;
