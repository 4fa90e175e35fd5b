use std::io;
use std::path::PathBuf;

use crate::plugin::{Capability, ConstructorShape};

/// Errors that can occur while resolving run arguments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed selector '{selector}': {reason}")]
    MalformedSelector { selector: String, reason: String },

    #[error("Could not read test file {}", path.display())]
    ConfigSourceUnavailable {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Invalid value '{value}' for argument '{key}': expected a non-negative integer")]
    InvalidNumericArgument { key: String, value: String },

    #[error("Invalid value '{value}' for argument '{key}': expected one of {expected}")]
    InvalidEnumArgument {
        key: String,
        value: String,
        expected: String,
    },

    #[error("Could not find class: {type_name}")]
    PluginNotFound { type_name: String },

    #[error("{type_name} does not extend {}", capability.contract_name())]
    PluginCapabilityMismatch {
        type_name: String,
        capability: Capability,
    },

    #[error("Must have {shape} for class {type_name}: {reason}")]
    PluginConstructionError {
        type_name: String,
        shape: ConstructorShape,
        reason: String,
    },

    #[error("Argument file error: {0}")]
    ArgumentFile(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: Option<io::Error>) -> Self {
        Error::ConfigSourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_number(key: &str, value: &str) -> Self {
        Error::InvalidNumericArgument {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// The argument key, path, or type name this error is about
    pub fn subject(&self) -> Option<String> {
        match self {
            Error::MalformedSelector { selector, .. } => Some(selector.clone()),
            Error::ConfigSourceUnavailable { path, .. } => Some(path.display().to_string()),
            Error::InvalidNumericArgument { key, .. } | Error::InvalidEnumArgument { key, .. } => {
                Some(key.clone())
            }
            Error::PluginNotFound { type_name }
            | Error::PluginCapabilityMismatch { type_name, .. }
            | Error::PluginConstructionError { type_name, .. } => Some(type_name.clone()),
            Error::ArgumentFile(_) | Error::IoError(_) | Error::SerializationError(_) => None,
        }
    }
}

/// Result type alias for runargs operations
pub type Result<T> = std::result::Result<T, Error>;
