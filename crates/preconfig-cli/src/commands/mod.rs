//! Command implementations for preconfig-cli

pub mod build;
pub mod check;

pub use build::{run_build, run_dry_run};
pub use check::run_check;
