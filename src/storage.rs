//! Persisted key-value storage for preferences and shortcuts.
//!
//! [`KeyValueStore`] is the boundary the rest of the crate writes through.
//! [`JsonFileStore`] keeps one flat JSON object on disk and rewrites it
//! synchronously on every mutation; [`MemoryStore`] is for tests and
//! embedders that persist elsewhere.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, StartPageError};

/// Storage key for the active search provider.
pub const PROVIDER_KEY: &str = "searchEngineKey";

/// Storage key for the pinned shortcut list (JSON array).
pub const SHORTCUTS_KEY: &str = "pinnedShortcuts";

/// String key-value storage.
pub trait KeyValueStore {
    /// Read a value; `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A store backed by a single JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`StartPageError::Storage`] if the file exists but is not a
    /// JSON object of strings, or an I/O error if it cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StartPageError::Storage(format!("{}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened storage");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StartPageError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Put `key` back to what it held before a mutation whose flush failed.
    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.entries.insert(key.to_owned(), value),
            None => self.entries.remove(key),
        };
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_owned(), value.to_owned());
        self.flush().inspect_err(|_| self.restore(key, previous))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if let Some(previous) = self.entries.remove(key) {
            self.flush().inspect_err(|_| self.restore(key, Some(previous)))?;
        }
        Ok(())
    }
}
