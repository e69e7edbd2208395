//! Cart line items and derived totals.
//!
//! A line item is a denormalized snapshot of an [`Item`] plus the shopper's
//! quantity and swatch choice. Lines are not deduplicated by item id: adding
//! the same item twice yields two lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Item, ItemId, Quantity};

/// The requested color is not one of the item's two swatches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("color '{color}' is not offered for item {item_id}")]
pub struct UnknownSwatchError {
    pub item_id: ItemId,
    pub color: String,
}

/// One quantity-bearing entry in the persisted cart.
///
/// Display fields other than `id`, `title` and `price` default when absent so
/// that carts written by older clients (which stored a reduced snapshot)
/// still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "img_url", default)]
    pub image_url: String,
    #[serde(default)]
    pub collection: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub color1: String,
    #[serde(default)]
    pub color2: String,
    pub quantity: Quantity,
    /// Chosen swatch color, `null` when the shopper picked none.
    #[serde(default)]
    pub color: Option<String>,
}

impl CartLineItem {
    /// Snapshot `item` into a new line.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSwatchError` if `color` is given and is neither of the
    /// item's swatch colors.
    pub fn for_item(
        item: &Item,
        quantity: Quantity,
        color: Option<&str>,
    ) -> Result<Self, UnknownSwatchError> {
        if let Some(color) = color
            && !item.has_swatch(color)
        {
            return Err(UnknownSwatchError {
                item_id: item.id,
                color: color.to_string(),
            });
        }

        Ok(Self {
            id: item.id,
            title: item.title.clone(),
            category: item.category.clone(),
            price: item.price,
            rating: item.rating,
            image_url: item.image_url.clone(),
            collection: item.collection.clone(),
            description: item.description.clone(),
            color1: item.color1.clone(),
            color2: item.color2.clone(),
            quantity,
            color: color.map(str::to_string),
        })
    }

    /// Price times quantity for this line, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity.get()))
    }
}

/// Sum of `price * quantity` over every line. Zero for an empty cart.
///
/// Saturates at `Decimal::MAX` instead of overflowing, so arbitrary persisted
/// prices never abort a load.
#[must_use]
pub fn cart_total(lines: &[CartLineItem]) -> Decimal {
    lines
        .iter()
        .map(CartLineItem::subtotal)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Total number of units across all lines.
#[must_use]
pub fn cart_item_count(lines: &[CartLineItem]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity.get())).sum()
}
