//! Catalog items as served by the catalog endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ItemId;

/// A catalog entry. Immutable once fetched.
///
/// Field names on the wire follow the catalog's JSON layout (`img_url`,
/// `desc`, `color1`, `color2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Numeric string on the wire, compared numerically.
    pub price: Decimal,
    pub rating: f64,
    #[serde(rename = "img_url")]
    pub image_url: String,
    pub collection: String,
    /// Primary color name, used by the color filter.
    pub color: String,
    /// First display swatch color.
    pub color1: String,
    /// Second display swatch color.
    pub color2: String,
    #[serde(rename = "desc", default)]
    pub description: String,
}

impl Item {
    /// The two swatch colors a shopper can pick from.
    #[must_use]
    pub fn swatches(&self) -> [&str; 2] {
        [self.color1.as_str(), self.color2.as_str()]
    }

    /// Whether `color` is one of this item's swatch colors.
    #[must_use]
    pub fn has_swatch(&self, color: &str) -> bool {
        self.swatches().contains(&color)
    }
}
