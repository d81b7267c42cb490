//! Overlay stores
//!
//! An `OverlayStore` is a flat collection of named byte records. The HUD core
//! decides what goes into the records; stores only list, read, write and
//! delete them.
//!
//! - `DirectoryStore`: One `<id>.json` file per record in a directory
//! - `MemoryStore`: Records kept in memory (tests, hosts without a disk)

use super::types::SaveError;
use crate::settings::app_dir;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const RECORD_EXTENSION: &str = "json";

/// Storage for overlay records keyed by record id.
pub trait OverlayStore {
    /// Ids of every stored record.
    fn list(&self) -> Result<Vec<String>, SaveError>;

    fn read(&self, id: &str) -> Result<Vec<u8>, SaveError>;

    fn write(&mut self, id: &str, bytes: &[u8]) -> Result<(), SaveError>;

    /// Removes a record. Best effort: failures are logged, never returned.
    fn delete(&mut self, id: &str);
}

/// Stores each record as a JSON file in one directory.
pub struct DirectoryStore {
    directory: PathBuf,
}

impl DirectoryStore {
    /// Creates a store in the given directory
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(DirectoryStore { directory })
    }

    /// Default overlay directory: `<config_dir>/keystroke-hud/overlays`.
    pub fn default_directory() -> PathBuf {
        app_dir().join("overlays")
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of a record inside the store directory.
    ///
    /// Ids that could name a file elsewhere are refused.
    fn record_path(&self, id: &str) -> Result<PathBuf, SaveError> {
        let escapes = id.is_empty()
            || id.contains(['/', '\\', '\0'])
            || id.contains("..")
            || id.starts_with('.');
        if escapes {
            return Err(SaveError::InvalidRecordId(id.to_string()));
        }

        Ok(self.directory.join(format!("{id}.{RECORD_EXTENSION}")))
    }
}

impl OverlayStore for DirectoryStore {
    fn list(&self) -> Result<Vec<String>, SaveError> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<Vec<u8>, SaveError> {
        let path = self.record_path(id)?;

        fs::read(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SaveError::NotFound(id.to_string()),
            _ => SaveError::Io(err),
        })
    }

    fn write(&mut self, id: &str, bytes: &[u8]) -> Result<(), SaveError> {
        let path = self.record_path(id)?;
        fs::write(&path, bytes)?;

        tracing::debug!("Overlay record written to {}", path.display());
        Ok(())
    }

    fn delete(&mut self, id: &str) {
        let path = match self.record_path(id) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("Not removing overlay record: {}", err);
                return;
            }
        };

        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!("Removed overlay record {}", path.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("Could not remove {}: {}", path.display(), err),
        }
    }
}

/// Keeps records in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl OverlayStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>, SaveError> {
        Ok(self.records.keys().cloned().collect())
    }

    fn read(&self, id: &str) -> Result<Vec<u8>, SaveError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| SaveError::NotFound(id.to_string()))
    }

    fn write(&mut self, id: &str, bytes: &[u8]) -> Result<(), SaveError> {
        self.records.insert(id.to_string(), bytes.to_vec());
        Ok(())
    }

    fn delete(&mut self, id: &str) {
        self.records.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_store_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("overlays");

        let store = DirectoryStore::new(&dir).unwrap();
        assert!(dir.is_dir());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_directory_store_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(root.path()).unwrap();

        store.write("left%20shift", b"{\"a\":1}").unwrap();
        store.write("default", b"{}").unwrap();
        fs::write(root.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(store.list().unwrap(), vec!["default", "left%20shift"]);
        assert_eq!(store.read("left%20shift").unwrap(), b"{\"a\":1}");
        assert!(root.path().join("left%20shift.json").exists());
    }

    #[test]
    fn test_directory_store_delete_is_best_effort() {
        let root = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::new(root.path()).unwrap();

        store.write("q", b"{}").unwrap();
        store.delete("q");
        store.delete("q");

        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.read("q"), Err(SaveError::NotFound(_))));
    }

    #[test]
    fn test_directory_store_refuses_ids_outside_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("overlays");
        let mut store = DirectoryStore::new(&dir).unwrap();

        for id in ["", "/", "../escape", "a/b", "a\\b", "..", ".hidden", "nul\0"] {
            assert!(
                matches!(store.write(id, b"{}"), Err(SaveError::InvalidRecordId(_))),
                "{id:?} was accepted"
            );
            assert!(matches!(store.read(id), Err(SaveError::InvalidRecordId(_))));
            store.delete(id);
        }

        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.write("b", b"2").unwrap();
        store.write("a", b"1").unwrap();
        assert_eq!(store.list().unwrap(), vec!["a", "b"]);
        assert_eq!(store.len(), 2);

        store.delete("a");
        assert!(!store.contains("a"));
        assert!(matches!(store.read("a"), Err(SaveError::NotFound(_))));
    }
}
