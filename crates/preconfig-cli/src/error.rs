//! Error types for preconfig-cli

use preconfig_fs::NormalizedPath;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the run with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the build pipeline
    #[error(transparent)]
    Core(#[from] preconfig_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// `--check` found an output that differs from a fresh render
    #[error("{path} is out of date; run preconfig to regenerate it")]
    Stale { path: NormalizedPath },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
