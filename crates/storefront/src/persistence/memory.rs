use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use shopfront_core::store::{KeyValueStore, StoreError};

/// In-memory key-value store.
///
/// Uses `RefCell` for interior mutability since the storefront state is
/// driven from a single UI thread. Primarily for tests and ephemeral
/// sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.simulate_write_error.get() {
            return Err(StoreError::WriteRejected(key.to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.simulate_write_error.get() {
            return Err(StoreError::WriteRejected(key.to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.simulate_write_error.get() {
            return Err(StoreError::WriteRejected("*".to_string()));
        }
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
