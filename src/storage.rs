//! Persisted Store
//!
//! Bridge between in-memory values and a durable local key-value slot,
//! independent of any rendering environment. Storage failure never escapes
//! this module; callers degrade to memory-only behavior for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage available in this context (e.g. access denied by the browser)
    #[error("local storage is unavailable")]
    Unavailable,
    /// The backend rejected a read or write (quota, security)
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// A raw string key-value slot
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser local storage backend
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// In-memory backend for tests and non-browser hosts
#[cfg(not(target_arch = "wasm32"))]
pub mod memory {
    use super::{StorageBackend, StorageError};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// HashMap-backed slot, optionally configured to reject writes
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        slots: Rc<RefCell<HashMap<String, String>>>,
        fail_writes: bool,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        /// A backend whose writes always fail, for degraded-path tests
        pub fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }

        pub fn insert_raw(&self, key: &str, value: &str) {
            self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    impl StorageBackend for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.slots.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Backend("quota exceeded".to_string()));
            }
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

/// Keeps a named value mirrored to a storage slot as JSON.
///
/// `load` once at startup, `update` after every mutation. Both absorb
/// every storage failure; the in-memory value stays authoritative.
#[derive(Clone, Default)]
pub struct PersistedStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistedStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the slot; absent or unparsable content falls back to `initial`
    pub fn load<T: DeserializeOwned>(&self, key: &str, initial: T) -> T {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return initial,
            Err(e) => {
                log_error(&format!("failed reading slot '{key}': {e}"));
                return initial;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log_error(&format!("failed parsing slot '{key}': {e}"));
                initial
            }
        }
    }

    /// Serialize and overwrite the slot; failures are logged and ignored
    pub fn update<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log_error(&format!("failed serializing slot '{key}': {e}"));
                return;
            }
        };
        if let Err(e) = self.backend.set(key, &json) {
            log_error(&format!("failed writing slot '{key}': {e}"));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(message: &str) {
    eprintln!("{message}");
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStorage;
    use super::*;
    use crate::models::Task;

    #[test]
    fn load_returns_initial_when_slot_is_empty() {
        let store = PersistedStore::new(MemoryStorage::new());
        let tasks: Vec<Task> = store.load("tasks", Vec::new());
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_returns_initial_on_unparsable_content() {
        let backend = MemoryStorage::new();
        backend.insert_raw("tasks", "not json {");
        let store = PersistedStore::new(backend);
        let tasks: Vec<Task> = store.load("tasks", Vec::new());
        assert!(tasks.is_empty());
    }

    #[test]
    fn update_then_load_round_trips() {
        let store = PersistedStore::new(MemoryStorage::new());
        let mut done = Task::new(2, "b".to_string());
        done.completed = true;
        let tasks = vec![Task::new(1, "a".to_string()), done];

        store.update("tasks", &tasks);
        let back: Vec<Task> = store.load("tasks", Vec::new());
        assert_eq!(back, tasks);
    }

    #[test]
    fn update_absorbs_write_failure() {
        let store = PersistedStore::new(MemoryStorage::failing());
        // Must not panic or surface the error
        store.update("tasks", &vec![Task::new(1, "a".to_string())]);
        let back: Vec<Task> = store.load("tasks", Vec::new());
        assert!(back.is_empty());
    }
}
