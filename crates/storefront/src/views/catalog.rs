//! Catalog listing view: fetch lifecycle, filter, search and pagination.

use std::sync::Arc;

use shopfront_core::catalog::{Facets, PAGE_SIZE, Pagination, filter_items, paginate};
use shopfront_core::{CartLineItem, FilterSpec, Item, ItemId};
use tracing::{debug, error, instrument};

use super::{FetchGuard, FetchTicket};
use crate::catalog::{CatalogClient, CatalogError};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Not mounted yet.
    #[default]
    Idle,
    Loading,
    Loaded(Arc<Vec<Item>>),
    /// The fetch failed; the message is shown inline.
    Failed(String),
}

/// One product tile on the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub item: Item,
    pub is_favorite: bool,
    pub in_cart: bool,
}

/// The rendered listing for the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub cards: Vec<ItemCard>,
    pub pagination: Pagination,
    /// Number of items matching the filter across all pages.
    pub matching: usize,
}

impl CatalogPage {
    /// True when nothing matches ("No products found.").
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Catalog listing state.
#[derive(Debug, Default)]
pub struct CatalogView {
    state: CatalogState,
    filter: FilterSpec,
    search: String,
    current_page: usize,
    guard: FetchGuard,
}

impl CatalogView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The fetched items, empty unless loaded.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        match &self.state {
            CatalogState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Error message if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Mark the view as loading and return the ticket for this fetch.
    pub fn begin_load(&mut self) -> FetchTicket {
        self.state = CatalogState::Loading;
        self.guard.begin()
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) if the
    /// ticket is stale or the view was unmounted.
    pub fn finish_load(
        &mut self,
        ticket: FetchTicket,
        result: Result<Arc<Vec<Item>>, CatalogError>,
    ) -> bool {
        if !self.guard.accepts(ticket) {
            debug!("Discarding stale catalog fetch result");
            return false;
        }

        self.state = match result {
            Ok(items) => {
                debug!(count = items.len(), "Catalog loaded");
                CatalogState::Loaded(items)
            }
            Err(e) => {
                error!("Fetch error: {e}");
                CatalogState::Failed(e.user_message())
            }
        };
        true
    }

    /// Fetch the catalog and apply the result.
    #[instrument(skip_all)]
    pub async fn load(&mut self, client: &CatalogClient) -> bool {
        let ticket = self.begin_load();
        let result = client.list_items().await;
        self.finish_load(ticket, result)
    }

    /// Stop accepting results from outstanding fetches.
    pub const fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Replace the filter specification and return to page 1.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        self.current_page = 1;
    }

    /// Replace the search string and return to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    /// Clear filter and search.
    pub fn reset_filters(&mut self) {
        self.set_filter(FilterSpec::default());
        self.search.clear();
    }

    /// Jump to `page`, clamped into the valid range. Returns the page set.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let matching = self.filtered().len();
        self.current_page = Pagination::new(matching, PAGE_SIZE, page).current_page;
        self.current_page
    }

    /// Items matching the filter and search, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Item> {
        filter_items(self.items(), &self.filter, &self.search)
    }

    /// Filter values present in the loaded catalog.
    #[must_use]
    pub fn facets(&self) -> Facets {
        Facets::from_items(self.items())
    }

    /// Build the current page, flagging favorites and items already in the cart.
    #[must_use]
    pub fn page(&self, favorites: &[ItemId], cart: &[CartLineItem]) -> CatalogPage {
        let filtered = self.filtered();
        let pagination = Pagination::new(filtered.len(), PAGE_SIZE, self.current_page);

        let cards = paginate(&filtered, pagination.current_page, PAGE_SIZE)
            .iter()
            .map(|item| ItemCard {
                item: (*item).clone(),
                is_favorite: favorites.contains(&item.id),
                in_cart: cart.iter().any(|line| line.id == item.id),
            })
            .collect();

        CatalogPage {
            cards,
            pagination,
            matching: filtered.len(),
        }
    }
}
