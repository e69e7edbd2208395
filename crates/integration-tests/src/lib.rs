//! Integration test harness for Shopfront.
//!
//! Tests start the catalog router on an ephemeral port and drive it with the
//! real [`CatalogClient`] and the cart and favorites managers over a
//! temporary [`FileStore`].
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::Router;
use shopfront_catalog::AppState;
use shopfront_core::{Item, ItemId};
use shopfront_storefront::persistence::FileStore;
use shopfront_storefront::{CatalogClient, CatalogClientConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A router serving on `127.0.0.1:<ephemeral>`, aborted on drop.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve `router` on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, handle }
    }

    /// Serve the catalog app over `items`.
    pub async fn catalog(items: Vec<Item>) -> Self {
        Self::start(shopfront_catalog::app(AppState::new(items))).await
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// A client for this server with caching disabled.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client(&self) -> CatalogClient {
        let config = CatalogClientConfig::new(&self.base_url())
            .expect("valid test URL")
            .without_cache();
        CatalogClient::new(&config).expect("Failed to build catalog client")
    }

    /// A client for this server with the default response cache.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn cached_client(&self) -> CatalogClient {
        let config = CatalogClientConfig::new(&self.base_url()).expect("valid test URL");
        CatalogClient::new(&config).expect("Failed to build catalog client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A file store in a fresh temporary directory. Keep the `TempDir` alive.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn temp_store() -> (TempDir, FileStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = FileStore::new(dir.path());
    (dir, store)
}

/// A catalog item with distinct facet values.
///
/// # Panics
///
/// Panics if `price` is not a decimal number.
#[must_use]
pub fn sample_item(id: i32, title: &str, price: &str, color: &str, category: &str) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        category: category.to_string(),
        price: price.parse().expect("valid price"),
        rating: 4.0,
        image_url: format!("https://img.example/{id}.jpg"),
        collection: "Winter".to_string(),
        color: color.to_string(),
        color1: "#111111".to_string(),
        color2: "#eeeeee".to_string(),
        description: format!("{title} description"),
    }
}

/// Twelve items: ids 1..=12, alternating Red/Blue, prices 10, 20, ... 120.
#[must_use]
pub fn sample_catalog() -> Vec<Item> {
    (1..=12)
        .map(|id| {
            let color = if id % 2 == 0 { "Blue" } else { "Red" };
            let category = if id <= 6 { "Hats" } else { "Jackets" };
            sample_item(id, &format!("Item {id}"), &(id * 10).to_string(), color, category)
        })
        .collect()
}
