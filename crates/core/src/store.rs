//! Key-value persistence contract.
//!
//! The cart and favorites managers only need string get/set by key, the
//! same surface a browser's local storage offers. Implementations live in
//! the storefront crate (in-memory and file-backed).

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be stored by this backend.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    /// The backend refused the write.
    #[error("storage write rejected for '{0}'")]
    WriteRejected(String),
}

/// A durable string key-value store.
///
/// Every `set` replaces the whole value for its key in one step; there is
/// no partial write.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Delete every key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be modified.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
