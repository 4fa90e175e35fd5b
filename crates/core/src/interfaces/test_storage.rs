//! Storage backend interface
//!
//! Provides read access to files pushed to a key-addressed test storage
//! service, as an alternative to the local file system.

use std::io::{self, Read};

/// Read-only access to a key-addressed storage backend
pub trait TestStorage {
    /// Open the file stored under `key`.
    ///
    /// Fails with [`io::ErrorKind::NotFound`] when the key does not exist.
    fn open_input_file(&self, key: &str) -> io::Result<Box<dyn Read + '_>>;
}
