//! Session store capability
//!
//! The original app keeps session state in the browser's localStorage,
//! an implicit global. Here the store is an injected capability so the
//! gate can run against an in-memory fake in tests and a file-backed
//! store in the e2e harness.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use loginwall_common::{Error, Result};

/// String key-value store backing the session gate.
///
/// Every operation is fallible: a real browser can have storage
/// disabled or restricted, and the gate must degrade rather than
/// crash when that happens.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, the test fake.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object at a fixed path.
///
/// This is the origin-scoped storage analogue. Every handle opening
/// the same path sees the same entries, like two tabs sharing
/// localStorage. Reads go back to the file each time, so a second
/// handle observes another handle's write on its next operation, not
/// immediately. There is no cross-handle notification, matching the
/// medium it models.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<()> {
        let text = serde_json::to_string(entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
