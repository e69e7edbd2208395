//! Command implementations.
//!
//! Every command builds its state from a [`Context`]: the catalog client for
//! reads and a [`FileStore`] under the data directory for cart and favorites.

pub mod cart;
pub mod favorites;
pub mod item;
pub mod items;

use std::io;
use std::path::PathBuf;

use shopfront_core::{PriceError, QuantityError};
use shopfront_storefront::persistence::FileStore;
use shopfront_storefront::{
    CartError, CatalogClient, CatalogClientConfig, CatalogError, ConfigError, FavoritesError,
    ShopConfig,
};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A view failed to load; the message was already rendered.
    #[error("{0}")]
    Fetch(String),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Favorites error: {0}")]
    Favorites(#[from] FavoritesError),

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Resolved configuration shared by all commands.
pub struct Context {
    config: ShopConfig,
}

impl Context {
    /// Load configuration from the environment, then apply flag overrides.
    pub fn new(catalog_url: Option<&str>, data_dir: Option<PathBuf>) -> Result<Self, CommandError> {
        let mut config = ShopConfig::from_env()?;

        if let Some(url) = catalog_url {
            config.catalog.base_url = CatalogClientConfig::new(url)?.base_url;
        }
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        tracing::debug!(
            catalog_url = %config.catalog.base_url,
            data_dir = %config.data_dir.display(),
            "Configuration loaded"
        );
        Ok(Self { config })
    }

    pub fn client(&self) -> Result<CatalogClient, CommandError> {
        Ok(CatalogClient::new(&self.config.catalog)?)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.config.data_dir.clone())
    }
}
