//! runargs - Resolve test run arguments into a validated run configuration
//!
//! This crate provides functionality to:
//! - Tokenize selector strings (`pkg.Foo#test[a,b],pkg.Bar`) into class/member pairs
//! - Read include/exclude lists from local files or a test storage backend
//! - Resolve plugins (filters, listeners, runner builders, ...) by type name
//! - Validate scalar arguments and assemble one immutable [`RunConfiguration`]
pub mod config;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod plugin;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{ArgumentSet, RunConfiguration, RunConfigurationBuilder};
pub use interfaces::{PluginHost, TestStorage};
pub use parser::tokenize;
pub use plugin::{Capability, PluginRegistry, PluginType};
pub use services::{DirectoryStorage, RawSource, SourceReader};
