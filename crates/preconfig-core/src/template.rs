//! Placeholder templates
//!
//! A template is plain text with `{{ name }}` placeholders. Rendering is a
//! single substitution pass: there are no loops, conditionals or filters,
//! and substituted values are never scanned for further placeholders.
//!
//! | Text                 | Parsed as                                  |
//! |----------------------|--------------------------------------------|
//! | `{{site_name}}`      | placeholder `site_name`                    |
//! | `{{ site_name }}`    | placeholder `site_name`                    |
//! | `a }} b`             | literal text                               |
//! | `{{ name \| upper }}` | error: not a plain variable name          |
//! | `{{ unclosed`        | error: unclosed expression                 |
//!
//! Every malformed expression is reported with its line number, so a
//! Jinja-only construct fails the run instead of leaking into the output.

use std::collections::{BTreeMap, BTreeSet};

use preconfig_fs::{NormalizedPath, io};

use crate::{Error, NAV_KEY, NavigationBlock, Result, Settings, Stage};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let text = io::read_text(path).map_err(|e| Error::input(Stage::Template, e))?;
        let template = Self::parse(&text).map_err(|message| Error::Parse {
            stage: Stage::Template,
            path: path.to_native(),
            message,
        })?;
        tracing::debug!(
            path = %path,
            placeholders = ?template.placeholders(),
            "loaded template"
        );
        Ok(template)
    }

    /// Split template text into literal and placeholder segments.
    ///
    /// Uses a single left-to-right scan. A closed `{{ ... }}` must hold a
    /// plain variable name and every `{{` must be closed; otherwise the
    /// error lists each offending expression with its line number.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let mut segments = Vec::new();
        let mut invalid = Vec::new();
        let mut literal = String::new();
        let mut offset = 0;

        while let Some(found) = text[offset..].find("{{") {
            let start = offset + found;
            literal.push_str(&text[offset..start]);

            let Some(end) = text[start + 2..].find("}}") else {
                invalid.push(format!("line {}: unclosed `{{{{`", line_of(text, start)));
                break;
            };
            let end_abs = start + 2 + end + 2;
            let name = text[start + 2..start + 2 + end].trim();

            if is_valid_name(name) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name.to_string()));
            } else {
                invalid.push(format!(
                    "line {}: `{}` is not a plain variable name",
                    line_of(text, start),
                    &text[start..end_abs]
                ));
            }
            offset = end_abs;
        }

        if !invalid.is_empty() {
            return Err(format!(
                "unsupported template expressions: {}",
                invalid.join("; ")
            ));
        }

        literal.push_str(&text[offset..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Distinct placeholder names, in order of first use.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) if seen.insert(name.as_str()) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Substitute every placeholder from `context`.
    ///
    /// Fails without producing any text when one or more placeholders have
    /// no value; the error lists every missing name.
    pub fn render(&self, context: &Context) -> Result<String> {
        let missing: BTreeSet<&str> = self
            .placeholders()
            .into_iter()
            .filter(|name| context.get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Render {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    output.push_str(context.get(name).unwrap_or_default());
                }
            }
        }
        Ok(output)
    }
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Values available to a template during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings keys plus the navigation block under [`NAV_KEY`].
    pub fn from_parts(settings: &Settings, nav: &NavigationBlock) -> Self {
        let mut context: Self = settings
            .iter_text()
            .map(|(key, text)| (key.to_string(), text))
            .collect();
        context.insert(NAV_KEY, nav.as_str());
        context
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
