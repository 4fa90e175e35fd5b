use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::parser::tokenize;

/// A test class, optionally narrowed to one member (method or parameterized case)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    pub qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

/// Ordered selectors; duplicates are kept
pub type SelectorList = Vec<Selector>;

impl Selector {
    pub fn class(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            member: None,
        }
    }

    pub fn member(qualified_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            member: Some(member.into()),
        }
    }

    /// Parse text that must name exactly one selector.
    ///
    /// Unlike [`tokenize`], this rejects empty input, lists, and a missing
    /// class name.
    pub fn parse(text: &str) -> Result<Self> {
        let mut selectors = tokenize(text);
        match selectors.len() {
            0 => Err(malformed(text, "no class name given")),
            1 => {
                let selector = selectors.remove(0);
                if selector.qualified_name.is_empty() {
                    Err(malformed(text, "class name is empty"))
                } else {
                    Ok(selector)
                }
            }
            n => Err(malformed(text, &format!("expected one selector, found {n}"))),
        }
    }
}

fn malformed(text: &str, reason: &str) -> Error {
    Error::MalformedSelector {
        selector: text.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.member {
            Some(member) => write!(f, "{}#{}", self.qualified_name, member),
            None => f.write_str(&self.qualified_name),
        }
    }
}
