//! Base settings loading
//!
//! Settings are a flat mapping of string keys to scalar values (site name,
//! author, repository URL, ...). Each key becomes a template variable.

use std::collections::BTreeMap;

use preconfig_fs::{ConfigStore, NormalizedPath};
use serde_json::Value;

use crate::{Error, Result, Stage};

/// Template variable reserved for the navigation block.
pub const NAV_KEY: &str = "nav_yaml";

/// Flat key/value settings, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: BTreeMap<String, Value>,
}

impl Settings {
    /// Load settings from a JSON, YAML or TOML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let value: Value = ConfigStore::new()
            .load(path)
            .map_err(|e| Error::input(Stage::Settings, e))?;
        let settings = Self::from_value(value).map_err(|message| Error::Parse {
            stage: Stage::Settings,
            path: path.to_native(),
            message,
        })?;
        tracing::debug!(path = %path, keys = settings.len(), "loaded settings");
        Ok(settings)
    }

    /// Validate a parsed document: a mapping of scalars without the
    /// reserved navigation key.
    pub fn from_value(value: Value) -> std::result::Result<Self, String> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(format!(
                    "top level must be a mapping of keys to values, found {}",
                    kind(&other)
                ));
            }
        };

        let mut values = BTreeMap::new();
        for (key, value) in map {
            if key == NAV_KEY {
                return Err(format!(
                    "key '{NAV_KEY}' is reserved for the navigation block"
                ));
            }
            let value = unwrap_toml_datetime(value);
            if matches!(value, Value::Array(_) | Value::Object(_)) {
                return Err(format!(
                    "key '{key}' must hold a scalar value, found {}",
                    kind(&value)
                ));
            }
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    /// The text a value renders as inside the template.
    ///
    /// Strings are verbatim and numbers use their canonical spelling.
    /// Booleans and null follow the Python spelling (`True`, `False`,
    /// `None`) that existing MkDocs templates were written against.
    pub fn text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(scalar_text)
    }

    /// Iterate over `(key, rendered text)` pairs.
    pub fn iter_text(&self) -> impl Iterator<Item = (&str, String)> {
        self.values.iter().map(|(k, v)| (k.as_str(), scalar_text(v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Rejected by from_value
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// TOML dates reach `serde_json` as a single-entry map under this key.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Replace a TOML date/time with its string form, as written in the file.
fn unwrap_toml_datetime(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(TOML_DATETIME_KEY) => {
            match map.remove(TOML_DATETIME_KEY) {
                Some(Value::String(text)) => Value::String(text),
                Some(other) => {
                    map.insert(TOML_DATETIME_KEY.to_string(), other);
                    Value::Object(map)
                }
                None => Value::Object(map),
            }
        }
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
