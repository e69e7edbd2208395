//! Pure catalog listing logic: filtering, pagination and facet discovery.
//!
//! Data flows `filter_items` -> `paginate`. Both are deterministic functions
//! of their inputs and preserve catalog order.

mod facets;
mod filter;
mod pagination;

pub use facets::Facets;
pub use filter::{filter_items, matches_search};
pub use pagination::{PAGE_SIZE, Pagination, page_count, paginate};
