//! Directory-backed test storage
//!
//! Serves storage keys as files below a root directory.

use crate::interfaces::TestStorage;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

/// [`TestStorage`] implementation reading from a local directory
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TestStorage for DirectoryStorage {
    fn open_input_file(&self, key: &str) -> io::Result<Box<dyn Read + '_>> {
        let relative = Path::new(key);
        // Keys must stay below the root
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("storage key {key} is outside the storage root"),
            ));
        }

        let file = File::open(self.root.join(relative))?;
        Ok(Box::new(file))
    }
}
