//! Key-value persistence backing the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists the session in origin-scoped `localStorage`.
//! Native tests use [`MemoryStorage`] so every session
//! rule can be exercised without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Failure writing to the underlying key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String-keyed, string-valued persistence.
///
/// Reads and removals never fail from the caller's point of view: an
/// unreadable entry is the same as a missing one.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// In-process store used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, for exercising quota-style failures.
    #[must_use]
    pub fn read_only() -> Self {
        Self { items: RefCell::default(), read_only: true }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write { key: key.to_owned(), reason: "read-only store".to_owned() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// The current origin's `localStorage`.
///
/// Outside the browser build every read misses and every write reports
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("failed to remove `{key}` from localStorage");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
