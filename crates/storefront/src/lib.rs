//! Shopfront storefront library.
//!
//! Client-side state for the storefront: a cached HTTP client for the
//! catalog endpoint, the cart and favorites managers backed by a persistent
//! key-value store, and the catalog and product-detail views.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog endpoint client
//! - [`cart`] - Cart manager
//! - [`favorites`] - Favorites manager
//! - [`persistence`] - Store backends and slot encoding
//! - [`views`] - Catalog listing and product detail view models
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod persistence;
pub mod views;

#[cfg(test)]
mod test_support;

pub use cart::{CartError, CartManager, CartSnapshot};
pub use catalog::{CatalogClient, CatalogError};
pub use config::{CatalogClientConfig, ConfigError, ShopConfig};
pub use favorites::{FavoriteToggle, FavoritesError, FavoritesManager};
