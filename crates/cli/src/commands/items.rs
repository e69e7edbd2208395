//! Catalog listing commands.

use std::io::{self, Write};

use shopfront_core::{FilterSpec, parse_amount};
use shopfront_storefront::views::CatalogView;
use shopfront_storefront::{CartManager, FavoritesManager};

use super::{CommandError, Context};
use crate::render;

/// Filter, search and page selection for `shop items`.
#[derive(Debug, Default)]
pub struct ItemsQuery {
    pub colors: Vec<String>,
    pub categories: Vec<String>,
    pub collections: Vec<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub page: usize,
}

impl ItemsQuery {
    fn filter(&self) -> Result<FilterSpec, CommandError> {
        let mut filter = FilterSpec::default()
            .with_colors(self.colors.iter().cloned())
            .with_categories(self.categories.iter().cloned())
            .with_collections(self.collections.iter().cloned());
        if let Some(max_price) = &self.max_price {
            filter = filter.with_max_price(parse_amount(max_price)?);
        }
        Ok(filter)
    }
}

/// Fetch the catalog into a fresh view, rendering the error inline on failure.
async fn load_view(ctx: &Context, out: &mut impl Write) -> Result<CatalogView, CommandError> {
    let client = ctx.client()?;
    let mut view = CatalogView::new();
    view.load(&client).await;

    if let Some(message) = view.error() {
        writeln!(out, "{message}")?;
        return Err(CommandError::Fetch(message.to_string()));
    }
    Ok(view)
}

/// `shop items`
pub async fn list(ctx: &Context, query: ItemsQuery) -> Result<(), CommandError> {
    let filter = query.filter()?;
    let mut out = io::stdout().lock();

    let mut view = load_view(ctx, &mut out).await?;
    view.set_filter(filter);
    if let Some(search) = query.search {
        view.set_search(search);
    }
    view.go_to_page(query.page);

    let store = ctx.store();
    let favorites = FavoritesManager::open(&store);
    let cart = CartManager::open(&store);

    let page = view.page(favorites.ids(), cart.lines());
    render::catalog_page(&mut out, &page)?;
    Ok(())
}

/// `shop facets`
pub async fn facets(ctx: &Context) -> Result<(), CommandError> {
    let mut out = io::stdout().lock();
    let view = load_view(ctx, &mut out).await?;
    render::facets(&mut out, &view.facets())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builds_filter() {
        let query = ItemsQuery {
            colors: vec!["Red".to_string()],
            categories: vec!["Hats".to_string(), "Jackets".to_string()],
            max_price: Some("$30".to_string()),
            ..ItemsQuery::default()
        };

        let filter = query.filter().unwrap();
        assert!(filter.colors.contains("Red"));
        assert_eq!(filter.categories.len(), 2);
        assert!(filter.collections.is_empty());
        assert_eq!(filter.price_range, parse_amount("30").unwrap());
    }

    #[test]
    fn test_query_without_restrictions() {
        assert!(ItemsQuery::default().filter().unwrap().is_unrestricted());
    }

    #[test]
    fn test_query_rejects_bad_price() {
        let query = ItemsQuery {
            max_price: Some("cheap".to_string()),
            ..ItemsQuery::default()
        };
        assert!(matches!(query.filter(), Err(CommandError::Price(_))));
    }
}
