//! Favorites manager.
//!
//! Favorited item ids live in the `favorites` slot, independent of the cart.
//! Each toggle is written through immediately.

use shopfront_core::ItemId;
use shopfront_core::store::{KeyValueStore, StoreError};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::persistence::{PersistError, StorageSlot, read_slot, write_slot};

/// Errors from favorites operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Outcome of a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub id: ItemId,
    /// Whether `id` is a favorite after the toggle.
    pub is_favorite: bool,
    pub favorites: Vec<ItemId>,
}

/// Favorited item ids backed by a persistent store.
pub struct FavoritesManager<S> {
    store: S,
    ids: Vec<ItemId>,
    load_error: Option<String>,
}

impl<S: KeyValueStore> FavoritesManager<S> {
    /// Load the persisted favorites. Unreadable data yields an empty set.
    pub fn open(store: S) -> Self {
        let (ids, load_error) = match read_slot::<Vec<ItemId>, _>(&store, StorageSlot::Favorites) {
            Ok(read) => (
                dedup(read.value),
                read.parse_error.map(|_| "Failed to load favorites.".to_string()),
            ),
            Err(e) => {
                warn!(error = %e, "Failed to read favorites from storage");
                (Vec::new(), Some("Failed to load favorites.".to_string()))
            }
        };

        Self {
            store,
            ids,
            load_error,
        }
    }

    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Add `id` if absent, remove it if present, and persist.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be read or written; the
    /// favorites are unchanged in that case.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, id: ItemId) -> Result<FavoriteToggle, FavoritesError> {
        let mut ids = self.read_current()?;

        let is_favorite = if let Some(pos) = ids.iter().position(|fav| *fav == id) {
            ids.remove(pos);
            false
        } else {
            ids.push(id);
            true
        };

        self.commit(ids)?;
        debug!(is_favorite, "Toggled favorite");

        Ok(FavoriteToggle {
            id,
            is_favorite,
            favorites: self.ids.clone(),
        })
    }

    /// Ensure `id` is a favorite.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be read or written.
    pub fn add(&mut self, id: ItemId) -> Result<&[ItemId], FavoritesError> {
        let mut ids = self.read_current()?;
        if !ids.contains(&id) {
            ids.push(id);
        }
        self.commit(ids)?;
        Ok(&self.ids)
    }

    /// Ensure `id` is not a favorite.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be read or written.
    pub fn remove(&mut self, id: ItemId) -> Result<&[ItemId], FavoritesError> {
        let mut ids = self.read_current()?;
        ids.retain(|fav| *fav != id);
        self.commit(ids)?;
        Ok(&self.ids)
    }

    /// Remove every favorite.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be written.
    pub fn clear(&mut self) -> Result<(), FavoritesError> {
        self.commit(Vec::new())
    }

    fn read_current(&self) -> Result<Vec<ItemId>, FavoritesError> {
        let read = read_slot(&self.store, StorageSlot::Favorites)?;
        Ok(dedup(read.value))
    }

    fn commit(&mut self, ids: Vec<ItemId>) -> Result<(), FavoritesError> {
        write_slot(&self.store, StorageSlot::Favorites, &ids)?;
        self.ids = ids;
        self.load_error = None;
        Ok(())
    }
}

/// Drop repeated ids, keeping the first occurrence.
fn dedup(ids: Vec<ItemId>) -> Vec<ItemId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
