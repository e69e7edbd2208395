//! Application state shared across handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use shopfront_core::{Item, ItemId};
use thiserror::Error;

/// Error loading the seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk seed document. Extra top-level keys are ignored.
#[derive(Debug, Deserialize)]
struct SeedFile {
    items: Vec<Item>,
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The item list is fixed for the lifetime of
/// the server.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    items: Vec<Item>,
}

impl AppState {
    /// State serving `items` in the given order.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { items }),
        }
    }

    /// Load the item list from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: SeedFile = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(seed.items))
    }

    /// Every item, in seed order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.inner.items
    }

    /// Look up one item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.inner.items.iter().find(|item| item.id == id)
    }
}
