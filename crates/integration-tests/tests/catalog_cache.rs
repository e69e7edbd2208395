//! Response caching in the catalog client, counted at the upstream handlers.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use shopfront_core::ItemId;
use shopfront_integration_tests::{TestServer, sample_catalog, sample_item};

#[derive(Clone, Default)]
struct Hits {
    list: Arc<AtomicUsize>,
    item: Arc<AtomicUsize>,
}

impl Hits {
    fn list(&self) -> usize {
        self.list.load(Ordering::SeqCst)
    }

    fn item(&self) -> usize {
        self.item.load(Ordering::SeqCst)
    }
}

async fn counting_server() -> (TestServer, Hits) {
    let hits = Hits::default();

    let list_hits = Arc::clone(&hits.list);
    let item_hits = Arc::clone(&hits.item);
    let router = Router::new()
        .route(
            "/items",
            get(move || {
                list_hits.fetch_add(1, Ordering::SeqCst);
                async { Json(sample_catalog()) }
            }),
        )
        .route(
            "/items/{id}",
            get(move |Path(id): Path<i32>| {
                item_hits.fetch_add(1, Ordering::SeqCst);
                async move { Json(sample_item(id, &format!("Item {id}"), "10", "Red", "Hats")) }
            }),
        );

    (TestServer::start(router).await, hits)
}

#[tokio::test]
async fn test_list_items_served_from_cache_until_invalidated() {
    let (server, hits) = counting_server().await;
    let client = server.cached_client();

    let first = client.list_items().await.unwrap();
    let second = client.list_items().await.unwrap();
    assert_eq!(hits.list(), 1);
    assert_eq!(first.len(), 12);
    assert_eq!(second.len(), 12);

    client.invalidate();
    client.list_items().await.unwrap();
    assert_eq!(hits.list(), 2);
}

#[tokio::test]
async fn test_get_item_cached_per_id() {
    let (server, hits) = counting_server().await;
    let client = server.cached_client();

    client.get_item(ItemId::new(3)).await.unwrap();
    let again = client.get_item(ItemId::new(3)).await.unwrap();
    assert_eq!(again.title, "Item 3");
    assert_eq!(hits.item(), 1);

    client.get_item(ItemId::new(4)).await.unwrap();
    assert_eq!(hits.item(), 2);
    assert_eq!(hits.list(), 0);
}

#[tokio::test]
async fn test_uncached_client_always_hits_upstream() {
    let (server, hits) = counting_server().await;
    let client = server.client();

    client.list_items().await.unwrap();
    client.list_items().await.unwrap();
    assert_eq!(hits.list(), 2);
}
