//! Service implementations
//!
//! Concrete readers and storage backends used during resolution.

pub mod directory_storage;
pub mod source_reader;

pub use directory_storage::DirectoryStorage;
pub use source_reader::{RawSource, SourceReader};
