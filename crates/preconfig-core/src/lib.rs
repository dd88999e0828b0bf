//! Core rendering layer for preconfig
//!
//! Loads the base settings and the navigation block, substitutes both into
//! the MkDocs template, and writes the result. Every stage runs once, in
//! order, and the first failure aborts the run before anything is written.
//!
//! # Example
//!
//! ```no_run
//! use preconfig_core::{BuildPaths, build};
//!
//! let report = build(&BuildPaths::default())?;
//! println!("wrote {}", report.output);
//! # Ok::<(), preconfig_core::Error>(())
//! ```

pub mod error;
pub mod nav;
pub mod pipeline;
pub mod settings;
pub mod template;

pub use error::{Error, Result, Stage};
pub use nav::NavigationBlock;
pub use pipeline::{BuildPaths, BuildReport, CheckReport, WriteStatus, build, check, render};
pub use settings::{NAV_KEY, Settings};
pub use template::{Context, Template};
