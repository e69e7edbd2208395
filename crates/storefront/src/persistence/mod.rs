//! Persistent store adapter.
//!
//! Cart and favorites each live in one named slot of a [`KeyValueStore`],
//! serialized as a single JSON document and overwritten in full on every
//! mutation.
//!
//! # Slots
//!
//! - `cartItems` - JSON array of cart line items
//! - `favorites` - JSON array of item ids
//!
//! An absent slot reads as the empty collection. A slot holding malformed
//! JSON also reads as empty, with the parse error logged and returned to the
//! caller so it can be reported.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use shopfront_core::store::{KeyValueStore, StoreError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Named slots in the persistent store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageSlot {
    CartItems,
    Favorites,
}

impl StorageSlot {
    /// The storage key for this slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CartItems => "cartItems",
            Self::Favorites => "favorites",
        }
    }
}

/// A slot held malformed JSON.
#[derive(Debug, Error)]
#[error("failed to parse stored '{key}': {source}")]
pub struct StorageParseError {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Errors writing a slot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize slot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of reading a slot.
#[derive(Debug)]
pub struct SlotRead<T> {
    /// The decoded value, or the default when absent or malformed.
    pub value: T,
    /// Set when the stored JSON could not be decoded.
    pub parse_error: Option<StorageParseError>,
}

/// Read and decode `slot`.
///
/// # Errors
///
/// Returns `StoreError` only if the backend itself fails; decode failures
/// degrade to `T::default()` and are reported through `SlotRead::parse_error`.
pub fn read_slot<T, S>(store: &S, slot: StorageSlot) -> Result<SlotRead<T>, StoreError>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(slot.key())? else {
        return Ok(SlotRead {
            value: T::default(),
            parse_error: None,
        });
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(SlotRead {
            value,
            parse_error: None,
        }),
        Err(source) => {
            tracing::warn!(
                key = slot.key(),
                error = %source,
                "Stored slot is malformed; treating as empty"
            );
            Ok(SlotRead {
                value: T::default(),
                parse_error: Some(StorageParseError {
                    key: slot.key(),
                    source,
                }),
            })
        }
    }
}

/// Serialize `value` and overwrite `slot` with it.
///
/// # Errors
///
/// Returns `PersistError` if serialization or the store write fails. On
/// failure the previously stored value is left in place.
pub fn write_slot<T, S>(store: &S, slot: StorageSlot, value: &T) -> Result<(), PersistError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(slot.key(), &raw)?;
    tracing::debug!(key = slot.key(), bytes = raw.len(), "Slot written");
    Ok(())
}
