//! Error types for preconfig-core

use std::fmt;
use std::path::PathBuf;

/// Result type for preconfig-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Settings,
    Navigation,
    Template,
    Render,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Settings => "settings",
            Self::Navigation => "navigation",
            Self::Template => "template",
            Self::Render => "render",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building the output document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input file does not exist
    #[error("{stage} file not found: {path}")]
    NotFound { stage: Stage, path: PathBuf },

    /// An input file exists but its content is unusable
    #[error("invalid {stage} file {path}: {message}")]
    Parse {
        stage: Stage,
        path: PathBuf,
        message: String,
    },

    /// The template references keys with no value
    #[error("template references undefined keys: {}", .missing.join(", "))]
    Render { missing: Vec<String> },

    /// Any other filesystem failure, including writing the output
    #[error("{stage} failed: {source}")]
    Fs {
        stage: Stage,
        #[source]
        source: preconfig_fs::Error,
    },
}

impl Error {
    /// The stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            Self::NotFound { stage, .. } | Self::Parse { stage, .. } | Self::Fs { stage, .. } => {
                *stage
            }
            Self::Render { .. } => Stage::Render,
        }
    }

    /// Classify an fs-layer error raised while handling an input file.
    pub(crate) fn input(stage: Stage, source: preconfig_fs::Error) -> Self {
        match source {
            preconfig_fs::Error::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                Self::NotFound { stage, path }
            }
            preconfig_fs::Error::ConfigParse { path, format, message } => Self::Parse {
                stage,
                path,
                message: format!("{format}: {message}"),
            },
            other => Self::Fs { stage, source: other },
        }
    }
}
