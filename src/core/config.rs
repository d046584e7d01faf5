//! `cpkit.toml` loading and run-setting resolution.
//!
//! Precedence for each setting: CLI flag, then environment, then config
//! file, then the built-in default.

use crate::core::error::{CpkitError, Result};
use crate::core::runner::{Cases, RunOptions};
use crate::core::solve::Mode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "cpkit.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CpkitConfig {
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub mode: Option<Mode>,
    pub cases: Option<Cases>,
    pub debug: Option<bool>,
    /// Input file; relative paths resolve against the config file's directory.
    pub input: Option<PathBuf>,
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub mode: Option<Mode>,
    pub cases: Option<Cases>,
    pub input: Option<PathBuf>,
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub options: RunOptions,
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub debug: bool,
}

pub fn parse_config(content: &str) -> Result<CpkitConfig> {
    toml::from_str(content).map_err(|e| CpkitError::ConfigError(e.to_string()))
}

/// Load config from `explicit` (must exist) or `<cwd>/cpkit.toml` (optional).
///
/// Returns the parsed config and the directory it was loaded from.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<(CpkitConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(p) => {
            let p = if p.is_absolute() { p.to_path_buf() } else { cwd.join(p) };
            if !p.exists() {
                return Err(CpkitError::NotFound(format!(
                    "config file {}",
                    p.display()
                )));
            }
            p
        }
        None => {
            let p = cwd.join(CONFIG_FILE);
            if !p.exists() {
                return Ok((CpkitConfig::default(), None));
            }
            p
        }
    };

    let content = fs::read_to_string(&path).map_err(CpkitError::IoError)?;
    let config: CpkitConfig = toml::from_str(&content)
        .map_err(|e| CpkitError::ConfigError(format!("{}: {}", path.display(), e)))?;
    let base = path.parent().map(Path::to_path_buf);
    Ok((config, base))
}

pub fn resolve(
    config: &CpkitConfig,
    config_dir: Option<&Path>,
    overrides: &RunOverrides,
    env_debug: Option<bool>,
) -> ResolvedRun {
    let mode = overrides.mode.or(config.run.mode).unwrap_or(Mode::Sort);
    // A mode given on the command line brings its own case default unless
    // cases is also given there.
    let cases = match (overrides.cases, overrides.mode) {
        (Some(c), _) => c,
        (None, Some(m)) => Cases::default_for(m),
        (None, None) => config.run.cases.unwrap_or_else(|| Cases::default_for(mode)),
    };

    let input = match &overrides.input {
        Some(p) => Some(p.clone()),
        None => config.run.input.as_ref().map(|p| match config_dir {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p.clone(),
        }),
    };

    let debug = overrides.debug || env_debug.or(config.run.debug).unwrap_or(false);

    ResolvedRun {
        options: RunOptions { mode, cases },
        input,
        debug,
    }
}
