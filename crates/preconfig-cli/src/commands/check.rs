//! Check command implementation
//!
//! Compares the output on disk with a fresh render, for CI.

use colored::Colorize;
use preconfig_core::BuildPaths;

use crate::error::{CliError, Result};

/// Fail with [`CliError::Stale`] when the output needs regenerating.
pub fn run_check(paths: &BuildPaths) -> Result<()> {
    let report = preconfig_core::check(paths)?;

    match report.diff() {
        None => {
            println!(
                "{} {} is up to date",
                "OK".green().bold(),
                report.output.as_str().cyan()
            );
            Ok(())
        }
        Some(diff) => {
            if report.existing.is_none() {
                println!("{} {} does not exist", "Missing".yellow().bold(), report.output);
            }
            print!("{diff}");
            Err(CliError::Stale {
                path: report.output,
            })
        }
    }
}
