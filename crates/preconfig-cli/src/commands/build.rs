//! Build command implementation

use std::io::Write;

use colored::Colorize;
use preconfig_core::BuildPaths;

use crate::error::Result;

/// Render the template and write the output document.
pub fn run_build(paths: &BuildPaths) -> Result<()> {
    let report = preconfig_core::build(paths)?;

    println!(
        "{} {} generated successfully ({}, {} bytes)",
        "OK".green().bold(),
        report.output.as_str().cyan(),
        report.status,
        report.bytes
    );
    Ok(())
}

/// Render the template and print it without touching the filesystem.
pub fn run_dry_run(paths: &BuildPaths) -> Result<()> {
    let rendered = preconfig_core::render(paths)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
