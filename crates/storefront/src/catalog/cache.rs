//! Cache types for catalog responses.

use std::sync::Arc;

use shopfront_core::{Item, ItemId};

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Items,
    Item(ItemId),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Items(Arc<Vec<Item>>),
    Item(Box<Item>),
}
