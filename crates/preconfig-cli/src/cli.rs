//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use preconfig_core::BuildPaths;
use preconfig_fs::NormalizedPath;

/// Render the MkDocs configuration from the preConfiguration sources
///
/// With no arguments, reads preConfiguration/config.json,
/// preConfiguration/nav_config.yml and preConfiguration/mkdocs-template.yml.j2,
/// and writes documentation/mkdocs.yml.
#[derive(Parser, Debug)]
#[command(name = "preconfig")]
#[command(author, version, about)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root holding the conventional layout
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Settings file (JSON, YAML or TOML)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Navigation file, injected verbatim
    #[arg(long, value_name = "PATH")]
    pub nav: Option<PathBuf>,

    /// Template file
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Output file to write
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the rendered document instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit non-zero if the output file is out of date; writes nothing
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Conventional layout under `--root`, with single-path overrides applied.
    pub fn build_paths(&self) -> BuildPaths {
        let mut paths = match &self.root {
            Some(root) => BuildPaths::rooted(root.as_path()),
            None => BuildPaths::default(),
        };
        let overrides = [
            (&self.settings, &mut paths.settings),
            (&self.nav, &mut paths.nav),
            (&self.template, &mut paths.template),
            (&self.output, &mut paths.output),
        ];
        for (arg, slot) in overrides {
            if let Some(path) = arg {
                *slot = NormalizedPath::new(path);
            }
        }
        paths
    }
}
