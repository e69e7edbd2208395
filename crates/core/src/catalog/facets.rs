//! Distinct filter values present in a catalog.

use rust_decimal::Decimal;

use crate::types::Item;

/// The color, category and collection values offered by a set of items, in
/// first-seen order, plus the highest price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub colors: Vec<String>,
    pub categories: Vec<String>,
    pub collections: Vec<String>,
    pub max_price: Option<Decimal>,
}

impl Facets {
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let mut facets = Self::default();
        for item in items {
            push_unique(&mut facets.colors, &item.color);
            push_unique(&mut facets.categories, &item.category);
            push_unique(&mut facets.collections, &item.collection);
            facets.max_price = Some(facets.max_price.map_or(item.price, |max| max.max(item.price)));
        }
        facets
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::item::tests::item;

    #[test]
    fn test_facets_first_seen_order() {
        let items = vec![
            item(1, "A", "10", "Red", "Hats", "Winter"),
            item(2, "B", "30", "Blue", "Hats", "Summer"),
            item(3, "C", "20", "Red", "Scarves", "Winter"),
        ];
        let facets = Facets::from_items(&items);
        assert_eq!(facets.colors, vec!["Red", "Blue"]);
        assert_eq!(facets.categories, vec!["Hats", "Scarves"]);
        assert_eq!(facets.collections, vec!["Winter", "Summer"]);
        assert_eq!(facets.max_price, Some(Decimal::new(30, 0)));
    }

    #[test]
    fn test_facets_empty_catalog() {
        assert_eq!(Facets::from_items(&[]), Facets::default());
    }
}
