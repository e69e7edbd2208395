//! Filter specification for the catalog listing.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The conjunctive set of active filter predicates.
///
/// Empty sets mean "no restriction" on that dimension. The price ceiling is
/// always applied; the default ceiling admits every price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub colors: BTreeSet<String>,
    /// Maximum price threshold (inclusive).
    #[serde(default = "unrestricted_price")]
    pub price_range: Decimal,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub collections: BTreeSet<String>,
}

const fn unrestricted_price() -> Decimal {
    Decimal::MAX
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            colors: BTreeSet::new(),
            price_range: unrestricted_price(),
            categories: BTreeSet::new(),
            collections: BTreeSet::new(),
        }
    }
}

impl FilterSpec {
    /// Restrict to the given color names.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(colors.into_iter().map(Into::into));
        self
    }

    /// Restrict to the given categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    /// Restrict to the given collections.
    #[must_use]
    pub fn with_collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections.extend(collections.into_iter().map(Into::into));
        self
    }

    /// Set the inclusive price ceiling.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: Decimal) -> Self {
        self.price_range = max_price;
        self
    }

    /// True when no dimension restricts anything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.colors.is_empty()
            && self.categories.is_empty()
            && self.collections.is_empty()
            && self.price_range == Decimal::MAX
    }
}
