//! The persistent store adapter.
//!
//! One shared key-value store (string keys to JSON documents) stands in
//! for a backend database. Reads of a missing key return a
//! type-appropriate default; writes replace the whole value under the
//! key. There is no partial update and no locking: every mutation above
//! this layer is read-entire-collection, transform in memory, write
//! back. Two logically concurrent mutations of the same collection
//! therefore race, and the second write silently overwrites the first
//! (last-write-wins). That is an accepted limitation of a
//! single-operator store, centralized here rather than repeated at
//! every call site.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::StoreError;

/// The pluggable persistence port. The repositories and everything
/// above them only see this trait, so the same core logic can later run
/// against a real database without changing their contracts.
pub trait StoreBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn write(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// Process-local in-memory backend. The test double, and the analog of
/// an unsaved browser profile.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .entries
            .read()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries
            .write()
            .expect("store lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .expect("store lock poisoned")
            .remove(key);
        Ok(())
    }
}

/// Configuration for the file-backed store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON document holding the whole key space.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("caregate-store.json"),
        }
    }
}

/// File-backed store: the whole key space lives in one JSON document,
/// rewritten on every mutation. A failed rewrite surfaces as
/// [`StoreError::Io`] and aborts the operation that caused it.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
}

impl FileStore {
    /// Open the store document at the configured path, creating an
    /// empty key space if none exists yet.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let entries = if config.path.exists() {
            let raw = fs::read_to_string(&config.path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };

        info!(path = %config.path.display(), "Opened store");

        Ok(Self {
            path: config.path.clone(),
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StoreBackend for FileStore {
    fn read(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .entries
            .read()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().expect("store lock poisoned");
        entries.remove(key);
        self.flush(&entries)
    }
}

// ---------------------------------------------------------------------------
// Typed facade
// ---------------------------------------------------------------------------

/// Typed facade over a [`StoreBackend`], shared by the repositories.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
}

impl Store {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Read a collection; a missing key is an empty collection.
    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.backend.read(key)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a collection wholesale.
    pub fn put_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        debug!(key, count = items.len(), "Writing collection");
        self.backend.write(key, serde_json::to_value(items)?)
    }

    /// Read a single record; a missing key is `None`.
    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.read(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Replace a single record wholesale.
    pub fn put_record<T: Serialize>(&self, key: &str, record: &T) -> Result<(), StoreError> {
        debug!(key, "Writing record");
        self.backend.write(key, serde_json::to_value(record)?)
    }

    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.backend.remove(key)
    }
}
