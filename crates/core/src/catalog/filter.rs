//! Filter/search engine.

use crate::types::{FilterSpec, Item};

/// Case-insensitive substring match of `query` against the item title.
///
/// An empty query matches everything.
#[must_use]
pub fn matches_search(item: &Item, query: &str) -> bool {
    query.is_empty() || item.title.to_lowercase().contains(&query.to_lowercase())
}

/// Return the items matching every active predicate in `spec` and `search`.
///
/// Predicates are applied in order: color, category, collection, price
/// ceiling, title search. Set-valued dimensions only restrict when non-empty.
/// The result keeps the input order.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], spec: &FilterSpec, search: &str) -> Vec<&'a Item> {
    let query = search.to_lowercase();

    items
        .iter()
        .filter(|item| spec.colors.is_empty() || spec.colors.contains(&item.color))
        .filter(|item| spec.categories.is_empty() || spec.categories.contains(&item.category))
        .filter(|item| spec.collections.is_empty() || spec.collections.contains(&item.collection))
        .filter(|item| item.price <= spec.price_range)
        .filter(|item| query.is_empty() || item.title.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::ItemId;
    use crate::types::item::tests::item;

    fn catalog() -> Vec<Item> {
        vec![
            item(1, "Linen Shirt", "25.00", "White", "Shirts", "Summer"),
            item(2, "Wool Coat", "180.00", "Black", "Coats", "Winter"),
            item(3, "Cotton Tee", "12.00", "White", "Shirts", "Basics"),
            item(4, "Rain Jacket", "95.50", "Yellow", "Coats", "Basics"),
            item(5, "Silk Shirt", "60.00", "Black", "Shirts", "Summer"),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<i32> {
        items.iter().map(|item| item.id.as_i32()).collect()
    }

    #[test]
    fn test_unrestricted_returns_input_unchanged() {
        let items = catalog();
        let result = filter_items(&items, &FilterSpec::default(), "");
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_color_filter_is_exact_subset() {
        let items = catalog();
        let all = filter_items(&items, &FilterSpec::default(), "");
        let white = filter_items(&items, &FilterSpec::default().with_colors(["White"]), "");

        assert_eq!(ids(&white), vec![1, 3]);
        assert!(white.iter().all(|item| item.color == "White"));
        assert!(white.iter().all(|item| all.contains(item)));
    }

    #[test]
    fn test_category_and_collection_filters() {
        let items = catalog();
        let spec = FilterSpec::default()
            .with_categories(["Coats"])
            .with_collections(["Basics", "Summer"]);
        assert_eq!(ids(&filter_items(&items, &spec, "")), vec![4]);
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let items = catalog();
        let spec = FilterSpec::default().with_max_price(Decimal::new(60, 0));
        assert_eq!(ids(&filter_items(&items, &spec, "")), vec![1, 3, 5]);
    }

    #[test]
    fn test_price_compares_numerically_not_lexically() {
        // "95.50" > "180.00" as strings, but not as numbers.
        let items = catalog();
        let spec = FilterSpec::default().with_max_price(Decimal::new(100, 0));
        assert_eq!(ids(&filter_items(&items, &spec, "")), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = catalog();
        assert_eq!(ids(&filter_items(&items, &FilterSpec::default(), "SHIRT")), vec![1, 5]);
        assert_eq!(ids(&filter_items(&items, &FilterSpec::default(), "coat")), vec![2]);
    }

    #[test]
    fn test_predicates_compose_conjunctively() {
        let items = catalog();
        let spec = FilterSpec::default()
            .with_colors(["Black"])
            .with_categories(["Shirts"])
            .with_max_price(Decimal::new(100, 0));
        let result = filter_items(&items, &spec, "silk");
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id, ItemId::new(5));

        assert!(filter_items(&items, &spec, "linen").is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let items = catalog();
        let spec = FilterSpec::default().with_colors(["White", "Black"]);
        assert_eq!(
            ids(&filter_items(&items, &spec, "s")),
            ids(&filter_items(&items, &spec, "s"))
        );
    }

    #[test]
    fn test_matches_search_empty_query() {
        let items = catalog();
        assert!(items.iter().all(|item| matches_search(item, "")));
        assert!(matches_search(items.first().unwrap(), "linen"));
    }
}
