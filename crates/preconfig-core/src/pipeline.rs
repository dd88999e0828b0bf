//! The build pipeline: settings, navigation, template, render, write.

use std::fmt;

use preconfig_fs::{NormalizedPath, io};
use similar::TextDiff;

use crate::{Context, Error, NavigationBlock, Result, Settings, Stage, Template};

/// Conventional input and output locations, relative to the project root.
pub const SETTINGS_PATH: &str = "preConfiguration/config.json";
pub const NAV_PATH: &str = "preConfiguration/nav_config.yml";
pub const TEMPLATE_PATH: &str = "preConfiguration/mkdocs-template.yml.j2";
pub const OUTPUT_PATH: &str = "documentation/mkdocs.yml";

/// Locations of the three inputs and the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    pub settings: NormalizedPath,
    pub nav: NormalizedPath,
    pub template: NormalizedPath,
    pub output: NormalizedPath,
}

impl BuildPaths {
    /// The conventional layout under `root`.
    pub fn rooted(root: impl Into<NormalizedPath>) -> Self {
        let root = root.into();
        Self {
            settings: root.join(SETTINGS_PATH),
            nav: root.join(NAV_PATH),
            template: root.join(TEMPLATE_PATH),
            output: root.join(OUTPUT_PATH),
        }
    }
}

impl Default for BuildPaths {
    /// The conventional layout relative to the working directory.
    fn default() -> Self {
        Self::rooted(".")
    }
}

/// How the output file changed on the last write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        })
    }
}

/// Result of a successful [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: NormalizedPath,
    pub bytes: usize,
    pub status: WriteStatus,
}

/// Result of a [`check`]: the fresh render next to what is on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub output: NormalizedPath,
    pub rendered: String,
    /// Current file bytes, `None` if the output does not exist yet.
    pub existing: Option<Vec<u8>>,
}

impl CheckReport {
    pub fn is_current(&self) -> bool {
        self.existing.as_deref() == Some(self.rendered.as_bytes())
    }

    /// Unified diff from the file on disk to the fresh render, `None` when
    /// the file is current.
    ///
    /// Invalid UTF-8 on disk is decoded lossily for display only; the
    /// comparison in [`CheckReport::is_current`] is on raw bytes.
    pub fn diff(&self) -> Option<String> {
        if self.is_current() {
            return None;
        }
        let old = self
            .existing
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        let on_disk = self.output.to_string();
        let diff = TextDiff::from_lines(&*old, self.rendered.as_str())
            .unified_diff()
            .context_radius(3)
            .header(&on_disk, "rendered")
            .to_string();
        Some(diff)
    }
}

/// Load every input in order and render the output document.
///
/// Nothing is written; the first failing stage aborts.
pub fn render(paths: &BuildPaths) -> Result<String> {
    let settings = Settings::load(&paths.settings)?;
    let nav = NavigationBlock::load(&paths.nav)?;
    let template = Template::load(&paths.template)?;

    let context = Context::from_parts(&settings, &nav);
    let rendered = template.render(&context)?;
    tracing::debug!(bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

/// Render and write the output document, replacing any previous file.
pub fn build(paths: &BuildPaths) -> Result<BuildReport> {
    let rendered = render(paths)?;
    let write_err = |source| Error::Fs {
        stage: Stage::Write,
        source,
    };

    let status = match io::read_bytes_if_exists(&paths.output).map_err(write_err)? {
        None => WriteStatus::Created,
        Some(previous) if previous == rendered.as_bytes() => WriteStatus::Unchanged,
        Some(_) => WriteStatus::Updated,
    };

    io::write_text(&paths.output, &rendered).map_err(write_err)?;
    tracing::info!(path = %paths.output, %status, "wrote output document");

    Ok(BuildReport {
        output: paths.output.clone(),
        bytes: rendered.len(),
        status,
    })
}

/// Render and compare with the existing output without writing.
pub fn check(paths: &BuildPaths) -> Result<CheckReport> {
    let rendered = render(paths)?;
    let existing = io::read_bytes_if_exists(&paths.output).map_err(|source| Error::Fs {
        stage: Stage::Write,
        source,
    })?;

    Ok(CheckReport {
        output: paths.output.clone(),
        rendered,
        existing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_follow_convention() {
        let paths = BuildPaths::default();
        assert_eq!(paths.settings.as_str(), "preConfiguration/config.json");
        assert_eq!(paths.nav.as_str(), "preConfiguration/nav_config.yml");
        assert_eq!(paths.template.as_str(), "preConfiguration/mkdocs-template.yml.j2");
        assert_eq!(paths.output.as_str(), "documentation/mkdocs.yml");
    }

    #[test]
    fn rooted_paths_join_root() {
        let paths = BuildPaths::rooted("/srv/site");
        assert_eq!(paths.output.as_str(), "/srv/site/documentation/mkdocs.yml");
    }

    #[test]
    fn check_report_without_file_is_stale() {
        let report = CheckReport {
            output: "documentation/mkdocs.yml".into(),
            rendered: "site_name: Docs\n".into(),
            existing: None,
        };
        assert!(!report.is_current());
        let diff = report.diff().unwrap();
        assert!(diff.contains("+site_name: Docs"), "{diff}");
    }

    #[test]
    fn check_report_compares_raw_bytes() {
        let report = CheckReport {
            output: "documentation/mkdocs.yml".into(),
            rendered: "site_name: Docs\n".to_string(),
            existing: Some(b"site_name: D\xffcs\n".to_vec()),
        };

        assert!(!report.is_current());
        let diff = report.diff().unwrap();
        assert!(diff.contains("+site_name: Docs"), "{diff}");
        assert!(diff.contains("-site_name: D\u{fffd}cs"), "{diff}");
    }
}
