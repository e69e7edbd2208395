//! Product detail view.

use shopfront_core::store::KeyValueStore;
use shopfront_core::{Item, ItemId, Quantity};
use tracing::{debug, error, instrument};

use super::{FetchGuard, FetchTicket};
use crate::cart::{CartError, CartManager, CartSnapshot};
use crate::catalog::{CatalogClient, CatalogError};

/// Where the detail fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Item),
    /// The catalog has no item with this id.
    NotFound(ItemId),
    /// The fetch failed; the message is shown inline.
    Failed(String),
}

/// Detail page for a single item: quantity and color selection plus add-to-cart.
#[derive(Debug)]
pub struct ProductDetail {
    id: ItemId,
    state: DetailState,
    quantity: Quantity,
    selected_color: Option<String>,
    guard: FetchGuard,
}

impl ProductDetail {
    #[must_use]
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            state: DetailState::Loading,
            quantity: Quantity::ONE,
            selected_color: None,
            guard: FetchGuard::default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// The loaded item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        match &self.state {
            DetailState::Loaded(item) => Some(item),
            _ => None,
        }
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn selected_color(&self) -> Option<&str> {
        self.selected_color.as_deref()
    }

    /// Message to show instead of the product, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::NotFound(_) => Some("Product not found."),
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) -> FetchTicket {
        self.state = DetailState::Loading;
        self.guard.begin()
    }

    /// Apply a fetch result. Returns `false` if the ticket is stale.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Item, CatalogError>) -> bool {
        if !self.guard.accepts(ticket) {
            debug!(item_id = %self.id, "Discarding stale item fetch result");
            return false;
        }

        self.state = match result {
            Ok(item) => {
                if let Some(color) = &self.selected_color
                    && !item.has_swatch(color)
                {
                    self.selected_color = None;
                }
                DetailState::Loaded(item)
            }
            Err(CatalogError::NotFound(id)) => DetailState::NotFound(id),
            Err(e) => {
                error!(item_id = %self.id, "Error fetching product details: {e}");
                DetailState::Failed("Failed to fetch product details.".to_string())
            }
        };
        true
    }

    /// Fetch the item and apply the result.
    #[instrument(skip_all, fields(item_id = %self.id))]
    pub async fn load(&mut self, client: &CatalogClient) -> bool {
        let ticket = self.begin_load();
        let result = client.get_item(self.id).await;
        self.finish_load(ticket, result)
    }

    pub const fn unmount(&mut self) {
        self.guard.unmount();
    }

    pub const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    /// Select one of the loaded item's swatches, or clear the selection.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemUnavailable` if the item is not loaded, or
    /// `CartError::InvalidColor` if `color` is not one of its swatches.
    pub fn select_color(&mut self, color: Option<&str>) -> Result<(), CartError> {
        let item = self.item().ok_or(CartError::ItemUnavailable(self.id))?;
        if let Some(color) = color
            && !item.has_swatch(color)
        {
            return Err(shopfront_core::UnknownSwatchError {
                item_id: item.id,
                color: color.to_string(),
            }
            .into());
        }
        self.selected_color = color.map(str::to_string);
        Ok(())
    }

    /// Add the loaded item to `cart` with the selected quantity and color.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemUnavailable` if the item is not loaded, or any
    /// error from [`CartManager::add`].
    pub fn add_to_cart<S: KeyValueStore>(
        &self,
        cart: &mut CartManager<S>,
    ) -> Result<CartSnapshot, CartError> {
        let item = self.item().ok_or(CartError::ItemUnavailable(self.id))?;
        cart.add(item, self.quantity, self.selected_color.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::test_support::item;

    fn loaded(id: i32) -> ProductDetail {
        let mut detail = ProductDetail::new(ItemId::new(id));
        let ticket = detail.begin_load();
        assert!(detail.finish_load(ticket, Ok(item(id, "25"))));
        detail
    }

    #[test]
    fn test_defaults() {
        let detail = ProductDetail::new(ItemId::new(4));
        assert_eq!(detail.state(), &DetailState::Loading);
        assert_eq!(detail.quantity(), Quantity::ONE);
        assert_eq!(detail.selected_color(), None);
    }

    #[test]
    fn test_not_found() {
        let mut detail = ProductDetail::new(ItemId::new(99));
        let ticket = detail.begin_load();
        detail.finish_load(ticket, Err(CatalogError::NotFound(ItemId::new(99))));
        assert_eq!(detail.error(), Some("Product not found."));
    }

    #[test]
    fn test_fetch_failure_message() {
        let mut detail = ProductDetail::new(ItemId::new(1));
        let ticket = detail.begin_load();
        detail.finish_load(
            ticket,
            Err(CatalogError::Status {
                status: 500,
                body: String::new(),
            }),
        );
        assert_eq!(detail.error(), Some("Failed to fetch product details."));
        assert!(detail.item().is_none());
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut detail = ProductDetail::new(ItemId::new(1));
        let ticket = detail.begin_load();
        detail.unmount();
        assert!(!detail.finish_load(ticket, Ok(item(1, "5"))));
        assert_eq!(detail.state(), &DetailState::Loading);
    }

    #[test]
    fn test_select_color_validates_swatch() {
        let mut detail = loaded(1);
        detail.select_color(Some("#ffffff")).unwrap();
        assert_eq!(detail.selected_color(), Some("#ffffff"));

        let err = detail.select_color(Some("#123456")).unwrap_err();
        assert!(matches!(err, CartError::InvalidColor(_)));
        assert_eq!(detail.selected_color(), Some("#ffffff"));

        detail.select_color(None).unwrap();
        assert_eq!(detail.selected_color(), None);
    }

    #[test]
    fn test_select_color_before_load() {
        let mut detail = ProductDetail::new(ItemId::new(1));
        let err = detail.select_color(Some("#000000")).unwrap_err();
        assert!(matches!(err, CartError::ItemUnavailable(_)));
    }

    #[test]
    fn test_add_to_cart_uses_selection() {
        let store = MemoryStore::new();
        let mut cart = CartManager::open(&store);
        let mut detail = loaded(3);
        detail.set_quantity(Quantity::new(2).unwrap());
        detail.select_color(Some("#000000")).unwrap();

        let snapshot = detail.add_to_cart(&mut cart).unwrap();
        let line = snapshot.lines.first().unwrap();
        assert_eq!(line.quantity.get(), 2);
        assert_eq!(line.color.as_deref(), Some("#000000"));
        assert_eq!(snapshot.total, rust_decimal::Decimal::new(50, 0));
    }

    #[test]
    fn test_add_to_cart_requires_loaded_item() {
        let store = MemoryStore::new();
        let mut cart = CartManager::open(&store);
        let detail = ProductDetail::new(ItemId::new(3));
        let err = detail.add_to_cart(&mut cart).unwrap_err();
        assert!(matches!(err, CartError::ItemUnavailable(_)));
        assert!(cart.lines().is_empty());
    }
}
