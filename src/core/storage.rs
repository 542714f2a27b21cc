//! Key/value persistence.
//!
//! [`KeyValueStore`] abstracts localStorage so settings and theme logic can
//! be exercised without a browser. JSON helpers mirror the string API.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::error::StorageError;
use crate::utils::{console, dom};

/// Minimal string key/value store.
pub trait KeyValueStore {
    /// Read a raw value. Missing keys and unavailable storage read as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read and deserialize a JSON value.
    ///
    /// Returns `None` if the key doesn't exist or deserialization fails.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get(key)?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                console::warn(&format!("ignoring unreadable '{}' entry: {}", key, e));
                None
            }
        }
    }

    /// Serialize and store a JSON value.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.set(key, &json)
    }
}

/// Browser localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed an entry without counting it as a write.
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::WriteFailed);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
