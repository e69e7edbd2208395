//! End-to-end shopping flow: catalog server, views, and cart and favorites
//! persisted in a file store.

#![allow(clippy::unwrap_used)]

use shopfront_core::{FilterSpec, ItemId, Quantity, format_amount};
use shopfront_integration_tests::{TestServer, sample_catalog, temp_store};
use shopfront_storefront::persistence::{FileStore, KeyValueStore};
use shopfront_storefront::views::{CatalogView, ProductDetail};
use shopfront_storefront::{CartManager, FavoritesManager};

#[tokio::test]
async fn test_browse_filter_and_flag_items() {
    let server = TestServer::catalog(sample_catalog()).await;
    let client = server.client();
    let (_dir, store) = temp_store();

    let mut favorites = FavoritesManager::open(&store);
    favorites.toggle(ItemId::new(3)).unwrap();

    let mut detail = ProductDetail::new(ItemId::new(5));
    detail.load(&client).await;
    let mut cart = CartManager::open(&store);
    detail.add_to_cart(&mut cart).unwrap();

    let mut view = CatalogView::new();
    view.load(&client).await;

    let first = view.page(favorites.ids(), cart.lines());
    assert_eq!(first.pagination.total_pages, 2);
    assert_eq!(first.cards.len(), 8);

    view.set_filter(FilterSpec::default().with_colors(["Red"]));
    let red = view.page(favorites.ids(), cart.lines());
    let flagged: Vec<(i32, bool, bool)> = red
        .cards
        .iter()
        .map(|card| (card.item.id.as_i32(), card.is_favorite, card.in_cart))
        .collect();
    assert_eq!(
        flagged,
        vec![
            (1, false, false),
            (3, true, false),
            (5, false, true),
            (7, false, false),
            (9, false, false),
            (11, false, false),
        ]
    );
    assert_eq!(red.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_cart_survives_reopen() {
    let server = TestServer::catalog(sample_catalog()).await;
    let client = server.client();
    let (dir, store) = temp_store();

    {
        let mut detail = ProductDetail::new(ItemId::new(2));
        detail.load(&client).await;
        detail.set_quantity(Quantity::new(3).unwrap());
        detail.select_color(Some("#eeeeee")).unwrap();

        let mut cart = CartManager::open(&store);
        let snapshot = detail.add_to_cart(&mut cart).unwrap();
        assert_eq!(format_amount(snapshot.total), "$60.00");
    }

    let reopened = CartManager::open(FileStore::new(dir.path()));
    assert!(reopened.load_error().is_none());
    assert_eq!(reopened.item_count(), 3);
    assert_eq!(format_amount(reopened.total()), "$60.00");
    let line = reopened.lines().first().unwrap();
    assert_eq!(line.color.as_deref(), Some("#eeeeee"));
    assert_eq!(line.title, "Item 2");
}

#[tokio::test]
async fn test_cart_mutations_persist() {
    let server = TestServer::catalog(sample_catalog()).await;
    let client = server.client();
    let (dir, store) = temp_store();
    let mut cart = CartManager::open(&store);

    for id in [1, 2, 1] {
        let mut detail = ProductDetail::new(ItemId::new(id));
        detail.load(&client).await;
        detail.add_to_cart(&mut cart).unwrap();
    }
    assert_eq!(cart.lines().len(), 3);

    cart.change_quantity(ItemId::new(1), Quantity::new(4).unwrap())
        .unwrap();
    cart.remove(ItemId::new(2)).unwrap();

    let reopened = CartManager::open(FileStore::new(dir.path()));
    let quantities: Vec<(i32, u32)> = reopened
        .lines()
        .iter()
        .map(|line| (line.id.as_i32(), line.quantity.get()))
        .collect();
    assert_eq!(quantities, vec![(1, 4), (1, 1)]);
    assert_eq!(format_amount(reopened.total()), "$50.00");
}

#[test]
fn test_corrupt_cart_file_degrades_then_recovers() {
    let (dir, store) = temp_store();
    store.set("cartItems", "[{broken").unwrap();

    let mut cart = CartManager::open(&store);
    assert_eq!(cart.load_error(), Some("Failed to load cart items."));
    assert!(cart.lines().is_empty());

    cart.clear().unwrap();
    assert!(cart.load_error().is_none());

    let raw = std::fs::read_to_string(dir.path().join("cartItems.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn test_favorites_survive_reopen() {
    let (dir, store) = temp_store();
    let mut favorites = FavoritesManager::open(&store);
    favorites.toggle(ItemId::new(4)).unwrap();
    favorites.toggle(ItemId::new(9)).unwrap();
    favorites.toggle(ItemId::new(4)).unwrap();

    let reopened = FavoritesManager::open(FileStore::new(dir.path()));
    assert_eq!(reopened.ids(), &[ItemId::new(9)]);
}
