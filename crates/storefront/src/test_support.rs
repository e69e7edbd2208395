//! Shared fixtures for unit tests.

use shopfront_core::{Item, ItemId};

/// An item with the given id and price and fixed swatches `#000000`/`#ffffff`.
pub fn item(id: i32, price: &str) -> Item {
    styled_item(id, &format!("Item {id}"), price, "Black", "Shirts", "Basics")
}

/// An item with explicit title and facet values.
#[allow(clippy::unwrap_used)]
pub fn styled_item(
    id: i32,
    title: &str,
    price: &str,
    color: &str,
    category: &str,
    collection: &str,
) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        category: category.to_string(),
        price: price.parse().unwrap(),
        rating: 4.5,
        image_url: format!("https://img.example/{id}.jpg"),
        collection: collection.to_string(),
        color: color.to_string(),
        color1: "#000000".to_string(),
        color2: "#ffffff".to_string(),
        description: format!("Description of item {id}"),
    }
}
