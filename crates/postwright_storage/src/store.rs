//! Key/value store trait and the in-memory backend.

use postwright_error::PostwrightResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// String key/value persistence for user preferences.
///
/// Absent keys read back as `Ok(None)`; removing an absent key is not
/// an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> PostwrightResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> PostwrightResult<()>;

    /// Remove `key` and its value.
    fn remove(&self, key: &str) -> PostwrightResult<()>;
}

/// Volatile store for tests and one-off runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> PostwrightResult<Option<String>> {
        let entries = self.entries.lock().expect("preference map lock");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PostwrightResult<()> {
        let mut entries = self.entries.lock().expect("preference map lock");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PostwrightResult<()> {
        let mut entries = self.entries.lock().expect("preference map lock");
        entries.remove(key);
        Ok(())
    }
}
