//! Boilerplate scaffolding for a new problem directory.
//!
//! Writes the embedded solution skeleton, a `cpkit.toml` and an empty-ish
//! `input.txt` for offline testing.
//!
//! - Existing files are never overwritten without `--force`
//! - `--dry-run` reports what would happen and touches nothing

use crate::core::assets;
use crate::core::error;
use std::fs;
use std::path::PathBuf;

pub const SCAFFOLD_FILES: [&str; 3] = ["solution.rs", "cpkit.toml", "input.txt"];

/// Scaffolding operation configuration.
pub struct ScaffoldOptions {
    /// Target directory for scaffold output
    pub target_dir: PathBuf,
    /// Force overwrite of existing files
    pub force: bool,
    /// Preview mode - log actions without writing files
    pub dry_run: bool,
}

pub fn scaffold_problem(opts: &ScaffoldOptions) -> Result<(), error::CpkitError> {
    println!("Scaffolding boilerplate into {}", opts.target_dir.display());

    // Plan every file before touching disk so a refusal leaves the directory as it was.
    let existing: Vec<&str> = SCAFFOLD_FILES
        .iter()
        .copied()
        .filter(|name| opts.target_dir.join(name).exists())
        .collect();
    if let Some(first) = existing.first()
        && !opts.force
        && !opts.dry_run
    {
        return Err(error::CpkitError::ValidationError(format!(
            "Refusing to overwrite existing path without --force: {}",
            opts.target_dir.join(first).display()
        )));
    }

    if !opts.dry_run {
        fs::create_dir_all(&opts.target_dir).map_err(error::CpkitError::IoError)?;
    }

    for name in SCAFFOLD_FILES {
        let dest = opts.target_dir.join(name);
        let exists = existing.contains(&name);
        match (opts.dry_run, exists && !opts.force) {
            (true, true) => println!(
                "  would-skip: {} (exists; pass --force to overwrite)",
                dest.display()
            ),
            (true, false) => println!("  would-write: {}", dest.display()),
            (false, _) => {
                let content = assets::get_template(name)
                    .ok_or_else(|| error::CpkitError::NotFound(format!("template {}", name)))?;
                fs::write(&dest, content).map_err(error::CpkitError::IoError)?;
                println!("  wrote: {}", dest.display());
            }
        }
    }
    Ok(())
}
