//! preconfig CLI
//!
//! Renders `documentation/mkdocs.yml` from the files in `preConfiguration/`.
//! Run it with no arguments before building the documentation.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to set up logging: {e}")))?;
    tracing::debug!(?cli, "parsed arguments");

    let paths = cli.build_paths();
    if cli.check {
        commands::run_check(&paths)
    } else if cli.dry_run {
        commands::run_dry_run(&paths)
    } else {
        commands::run_build(&paths)
    }
}
