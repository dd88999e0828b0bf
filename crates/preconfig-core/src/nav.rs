//! Navigation block loading

use preconfig_fs::{NormalizedPath, io};

use crate::{Error, Result, Stage};

/// The verbatim contents of the navigation file.
///
/// The text is never parsed or validated; it is pasted into the template
/// exactly as read, trailing newline included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationBlock(String);

impl NavigationBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let text = io::read_text(path).map_err(|e| Error::input(Stage::Navigation, e))?;
        tracing::debug!(path = %path, bytes = text.len(), "loaded navigation block");
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
