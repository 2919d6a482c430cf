//! Persisted preferences: one JSON object under one namespaced key.
//!
//! Every mutation reads the whole object, changes one field and writes the
//! whole object back. The page runs on a single thread in a single tab, so
//! the read-modify-write needs no coordination.
//!
//! Storage problems never escape this module. A blob that cannot be read or
//! parsed is treated as empty, a failed write is reported as `false`, and
//! both are logged.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{config::DATA_STORAGE_KEY, error::StoreError};

/// Raw string key-value storage, e.g. `window.localStorage`.
pub trait KeyValueBackend {
    /// Read a value. `Ok(None)` means the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Rc<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// In-memory backend for tests and for pages where `localStorage` is
/// unavailable.
///
/// Uses `RefCell` because the page is single-threaded; the trait only hands
/// out `&self`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemoryBackend {
    /// Empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write and delete fail.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw stored text, bypassing JSON handling.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store raw text, bypassing JSON handling.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        if self.simulate_write_error.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "simulated write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.insert_raw(key, value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// JSON object persisted under a single namespaced key.
#[derive(Debug, Clone)]
pub struct PreferenceStore<B> {
    backend: B,
    namespace: String,
}

impl<B: KeyValueBackend> PreferenceStore<B> {
    /// Store under an explicit namespace key.
    pub fn new(backend: B, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    /// Store under the page's [`DATA_STORAGE_KEY`].
    pub fn with_default_namespace(backend: B) -> Self {
        Self::new(backend, DATA_STORAGE_KEY)
    }

    /// The whole blob. Missing, unreadable or malformed data yields an empty
    /// object.
    pub fn get_all(&self) -> Map<String, Value> {
        match self.load() {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(namespace = %self.namespace, "treating preference store as empty: {err}");
                Map::new()
            },
        }
    }

    /// Value of one field, `None` when absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.get_all().remove(key)
    }

    /// Value of one field decoded into `T`. A field of the wrong shape is
    /// logged and reported as absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                tracing::warn!(namespace = %self.namespace, key, "ignoring malformed preference: {err}");
                None
            },
        }
    }

    /// Set one field. Returns `false` (after logging) if the value cannot be
    /// encoded or the blob cannot be written.
    pub fn save(&self, key: &str, value: impl Serialize) -> bool {
        let result = serde_json::to_value(value)
            .map_err(StoreError::from)
            .and_then(|value| {
                let mut data = self.get_all();
                data.insert(key.to_string(), value);
                self.store(&data)
            });
        self.report("save", key, result)
    }

    /// Delete one field. Removing an absent field still rewrites the blob.
    pub fn remove(&self, key: &str) -> bool {
        let mut data = self.get_all();
        data.remove(key);
        let result = self.store(&data);
        self.report("remove", key, result)
    }

    /// Drop the whole blob.
    pub fn clear(&self) -> bool {
        let result = self.backend.delete(&self.namespace);
        self.report("clear", &self.namespace, result)
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        match self.backend.read(&self.namespace)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Map::new()),
        }
    }

    fn store(&self, data: &Map<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string(data)?;
        self.backend.write(&self.namespace, &raw)
    }

    fn report(&self, op: &str, key: &str, result: Result<(), StoreError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(namespace = %self.namespace, key, "preference {op} failed: {err}");
                false
            },
        }
    }
}
