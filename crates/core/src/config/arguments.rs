use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Raw string-keyed arguments as supplied by the invoking harness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentSet {
    values: BTreeMap<String, String>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object of string values
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let arguments = serde_json::from_str(&contents).map_err(|e| {
            Error::ArgumentFile(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(arguments)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of `self`; keys in `other` win
    pub fn merge(&mut self, other: ArgumentSet) {
        for (key, value) in other.values {
            if let Some(previous) = self.values.insert(key.clone(), value) {
                debug!("Argument {key} overrides earlier value {previous:?}");
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArgumentSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
