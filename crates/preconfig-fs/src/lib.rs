//! Filesystem layer for preconfig
//!
//! Provides normalized paths, verbatim text reads, atomic writes and
//! format-agnostic loading of structured data files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
pub use path::NormalizedPath;
