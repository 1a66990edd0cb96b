use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use noctis_core::storage::KeyValueStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not create data directory `{path}`: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not read data file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
}

/// Persists a string-to-string map as one JSON document on disk. Every `set`
/// re-reads the document before writing so that sibling instances opened on
/// the same path do not clobber each other's keys within a process run.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store, creating parent directories as needed. A malformed
    /// document is logged and dropped; stale data never blocks startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|source| StoreError::CreateDir { path: parent.to_path_buf(), source })?;
            }
        }

        let entries = read_document(&path)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let serialized = match serde_json::to_string_pretty(&self.entries) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "could not serialize data document");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), %error, "could not write data document");
        } else {
            debug!(path = %self.path.display(), keys = self.entries.len(), "data document written");
        }
    }

    fn reload(&mut self) {
        match read_document(&self.path) {
            Ok(on_disk) => {
                // Keys written by another instance since open are merged in;
                // our own pending view wins on conflict.
                for (key, value) in on_disk {
                    self.entries.entry(key).or_insert(value);
                }
            }
            Err(error) => warn!(%error, "could not re-read data document before write"),
        }
    }
}

fn read_document(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => return Err(StoreError::ReadFile { path: path.to_path_buf(), source }),
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => Ok(entries),
        Err(error) => {
            warn!(path = %path.display(), %error, "discarding malformed data document");
            Ok(BTreeMap::new())
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.reload();
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        self.reload();
        self.entries.remove(key);
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use noctis_core::storage::KeyValueStore;

    use super::FileStore;

    #[test]
    fn set_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noctis-data.json");

        {
            let mut store = FileStore::open(&path).expect("open");
            store.set("gothic-cart", "[]");
        }

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("gothic-cart"), Some("[]".to_string()));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path().join("absent.json")).expect("open");
        assert_eq!(store.get("gothic-cart"), None);
    }

    #[test]
    fn malformed_document_is_discarded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noctis-data.json");
        std::fs::write(&path, "{this is not json").expect("write");

        let store = FileStore::open(&path).expect("open");
        assert_eq!(store.get("gothic-cart"), None);
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/deeper/noctis-data.json");

        let mut store = FileStore::open(&path).expect("open");
        store.set("gothic-auth", "{}");
        assert!(path.exists());
    }

    #[test]
    fn sibling_instances_do_not_clobber_each_other() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noctis-data.json");

        let mut first = FileStore::open(&path).expect("open first");
        let mut second = FileStore::open(&path).expect("open second");

        first.set("gothic-cart", "[1]");
        second.set("gothic-auth", "{}");

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("gothic-cart"), Some("[1]".to_string()));
        assert_eq!(reopened.get("gothic-auth"), Some("{}".to_string()));
    }

    #[test]
    fn remove_deletes_the_key_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("noctis-data.json");

        let mut store = FileStore::open(&path).expect("open");
        store.set("gothic-cart", "[]");
        store.remove("gothic-cart");

        let reopened = FileStore::open(&path).expect("reopen");
        assert_eq!(reopened.get("gothic-cart"), None);
    }
}
