//! Line-oriented list reader over the file system and test storage

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::interfaces::TestStorage;

/// Where an argument's data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSource {
    Inline(String),
    FilePath(PathBuf),
    StorageKey(String),
}

/// Reads lists from inline values, local files, or a storage backend
#[derive(Clone, Copy, Default)]
pub struct SourceReader<'a> {
    storage: Option<&'a dyn TestStorage>,
}

impl<'a> SourceReader<'a> {
    pub fn new(storage: Option<&'a dyn TestStorage>) -> Self {
        Self { storage }
    }

    /// Read one entry per non-empty line.
    ///
    /// Inline values are returned whole for the caller to split. Storage keys
    /// are tried against the storage backend first (with one leading `/`
    /// stripped) when `use_storage_service` is set, then as a local path.
    pub fn read_list(&self, source: &RawSource, use_storage_service: bool) -> Result<Vec<String>> {
        match source {
            RawSource::Inline(value) => Ok(vec![value.clone()]),
            RawSource::FilePath(path) => read_local(path),
            RawSource::StorageKey(key) if use_storage_service => self.read_storage(key),
            RawSource::StorageKey(key) => read_local(Path::new(key)),
        }
    }

    fn read_storage(&self, key: &str) -> Result<Vec<String>> {
        let Some(storage) = self.storage else {
            warn!("Test storage requested but no storage backend is available, reading {key} locally");
            return read_local(Path::new(key));
        };

        let relative = key.strip_prefix('/').unwrap_or(key);
        match storage.open_input_file(relative) {
            Ok(reader) => {
                debug!("Reading {relative} from test storage");
                read_lines(reader).map_err(|e| Error::unavailable(key, Some(e)))
            }
            Err(e) => {
                warn!("Could not open {relative} in test storage ({e}), falling back to local file");
                read_local(Path::new(key))
            }
        }
    }
}

fn read_local(path: &Path) -> Result<Vec<String>> {
    debug!("Reading list from local file {:?}", path);
    let file = File::open(path).map_err(|e| Error::unavailable(path, Some(e)))?;
    read_lines(file).map_err(|e| Error::unavailable(path, Some(e)))
}

fn read_lines(reader: impl Read) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            entries.push(line.to_string());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeStorage {
        files: HashMap<String, String>,
    }

    impl FakeStorage {
        fn with_file(key: &str, contents: &str) -> Self {
            let mut storage = Self::default();
            storage.files.insert(key.to_string(), contents.to_string());
            storage
        }
    }

    impl TestStorage for FakeStorage {
        fn open_input_file(&self, key: &str) -> io::Result<Box<dyn Read + '_>> {
            match self.files.get(key) {
                Some(contents) => Ok(Box::new(Cursor::new(contents.as_bytes()))),
                None => Err(io::Error::new(io::ErrorKind::NotFound, key.to_string())),
            }
        }
    }

    #[test]
    fn test_inline_value_is_not_split() {
        let reader = SourceReader::default();
        let list = reader
            .read_list(&RawSource::Inline("A,B\nC".to_string()), false)
            .unwrap();
        assert_eq!(list, vec!["A,B\nC"]);
    }

    #[test]
    fn test_reads_local_file_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tests.txt");
        fs::write(&path, "ClassName3\n\n  ClassName4#method2  \npkg.number.two").unwrap();

        let list = SourceReader::default()
            .read_list(&RawSource::FilePath(path), false)
            .unwrap();
        assert_eq!(list, vec!["ClassName3", "ClassName4#method2", "pkg.number.two"]);
    }

    #[test]
    fn test_empty_file_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let list = SourceReader::default()
            .read_list(&RawSource::FilePath(path), false)
            .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_local_file() {
        let err = SourceReader::default()
            .read_list(&RawSource::FilePath(PathBuf::from("idontexist")), false)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigSourceUnavailable { ref path, .. } if path == Path::new("idontexist")
        ));
    }

    #[test]
    fn test_reads_from_storage() {
        let storage = FakeStorage::with_file("myTestStorage", "ClassName4#method2");
        let reader = SourceReader::new(Some(&storage));
        let list = reader
            .read_list(&RawSource::StorageKey("myTestStorage".to_string()), true)
            .unwrap();
        assert_eq!(list, vec!["ClassName4#method2"]);
    }

    #[test]
    fn test_leading_slash_is_stripped_for_storage() {
        let storage = FakeStorage::with_file("myTestStorage", "ClassName4#method2");
        let reader = SourceReader::new(Some(&storage));
        let with_slash = reader
            .read_list(&RawSource::StorageKey("/myTestStorage".to_string()), true)
            .unwrap();
        let without_slash = reader
            .read_list(&RawSource::StorageKey("myTestStorage".to_string()), true)
            .unwrap();
        assert_eq!(with_slash, without_slash);
    }

    #[test]
    fn test_storage_falls_back_to_local_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("myTestFile.txt");
        fs::write(&path, "ClassName4#method2").unwrap();

        let storage = FakeStorage::default();
        let reader = SourceReader::new(Some(&storage));
        let key = path.to_string_lossy().to_string();
        let list = reader
            .read_list(&RawSource::StorageKey(key), true)
            .unwrap();
        assert_eq!(list, vec!["ClassName4#method2"]);
    }

    #[test]
    fn test_storage_and_local_both_missing() {
        let storage = FakeStorage::default();
        let reader = SourceReader::new(Some(&storage));
        let err = reader
            .read_list(&RawSource::StorageKey("idontexist".to_string()), true)
            .unwrap_err();
        assert!(matches!(err, Error::ConfigSourceUnavailable { .. }));
        assert_eq!(err.subject().as_deref(), Some("idontexist"));
    }

    #[test]
    fn test_storage_disabled_skips_backend() {
        let storage = FakeStorage::with_file("myTestStorage", "ClassName4#method2");
        let reader = SourceReader::new(Some(&storage));
        let err = reader
            .read_list(&RawSource::StorageKey("myTestStorage".to_string()), false)
            .unwrap_err();
        assert!(matches!(err, Error::ConfigSourceUnavailable { .. }));
    }
}
