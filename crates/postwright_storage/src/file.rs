//! JSON-file backend for preference storage.

use crate::store::KeyValueStore;
use postwright_error::{PostwrightResult, StorageError, StorageErrorKind};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

const APP_DIR: &str = "postwright";
const PREFS_FILE: &str = "preferences.json";

/// Preference store persisted as one JSON object on disk.
///
/// Every write rewrites the whole document; the file is small (a
/// handful of short strings) so this stays simple and crash-safe
/// enough for preference data.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes all file access within this process; a read taken
    // mid-rewrite would see a truncated document.
    file_lock: Mutex<()>,
}

impl FileStore {
    /// Open the default store under the user's config directory
    /// (`~/.config/postwright/preferences.json` on Linux).
    pub fn new() -> PostwrightResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NoConfigDir))?;
        Ok(Self::with_path(base.join(APP_DIR).join(PREFS_FILE)))
    }

    /// Open a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> PostwrightResult<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::new(StorageErrorKind::Io(e.to_string())).into()),
        };
        serde_json::from_str(&raw)
            .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())).into())
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> PostwrightResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        }
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PostwrightResult<Option<String>> {
        let _guard = self.file_lock.lock().expect("preference file lock");
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PostwrightResult<()> {
        let _guard = self.file_lock.lock().expect("preference file lock");
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> PostwrightResult<()> {
        let _guard = self.file_lock.lock().expect("preference file lock");
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_path(dir.path().join("prefs.json"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::with_path(&path);
        store.set("fb_app_id", "123456789").unwrap();

        let reopened = FileStore::with_path(&path);
        assert_eq!(
            reopened.get("fb_app_id").unwrap().as_deref(),
            Some("123456789")
        );
    }

    #[test]
    fn remove_deletes_only_the_named_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::with_path(dir.path().join("prefs.json"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn concurrent_reads_never_observe_partial_writes() {
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::with_path(dir.path().join("prefs.json")));
        store.set("fb_app_id", &"9".repeat(512)).unwrap();

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..200 {
                    store.set("fb_app_id", &i.to_string().repeat(512)).unwrap();
                }
            })
        };
        let reader = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let value = store.get("fb_app_id").unwrap();
                    assert!(value.is_some());
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();
    }

    #[test]
    fn corrupt_file_surfaces_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::with_path(&path);
        assert!(store.get("k").is_err());
    }
}
