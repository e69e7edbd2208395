//! Cart manager.
//!
//! Every operation is a read-modify-write of the whole `cartItems` slot:
//! read the persisted lines, apply the change, write the full collection
//! back, then mirror it in memory. In-memory and persisted state are
//! identical after each successful operation; a failed write leaves both
//! untouched.

use rust_decimal::Decimal;
use shopfront_core::store::{KeyValueStore, StoreError};
use shopfront_core::{
    CartLineItem, Item, ItemId, Quantity, UnknownSwatchError, cart_item_count, cart_total,
};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::persistence::{PersistError, StorageSlot, read_slot, write_slot};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),

    #[error(transparent)]
    InvalidColor(#[from] UnknownSwatchError),

    #[error("No cart line for item {0}")]
    LineNotFound(ItemId),

    #[error("Item {0} is not loaded")]
    ItemUnavailable(ItemId),
}

/// Derived cart state returned by every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineItem>,
    pub total: Decimal,
    pub item_count: u64,
}

impl CartSnapshot {
    fn of(lines: Vec<CartLineItem>) -> Self {
        Self {
            total: cart_total(&lines),
            item_count: cart_item_count(&lines),
            lines,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart state backed by a persistent store.
pub struct CartManager<S> {
    store: S,
    lines: Vec<CartLineItem>,
    total: Decimal,
    load_error: Option<String>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Load the persisted cart.
    ///
    /// Absent or unreadable data yields an empty cart; the failure is logged
    /// and available from [`load_error`](Self::load_error).
    pub fn open(store: S) -> Self {
        let read = read_slot::<Vec<CartLineItem>, _>(&store, StorageSlot::CartItems);
        let (lines, load_error) = match read {
            Ok(read) => (
                read.value,
                read.parse_error.map(|_| "Failed to load cart items.".to_string()),
            ),
            Err(e) => {
                warn!(error = %e, "Failed to read cart from storage");
                (Vec::new(), Some("Failed to load cart items.".to_string()))
            }
        };

        let total = cart_total(&lines);
        Self {
            store,
            lines,
            total,
            load_error,
        }
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Sum of `price * quantity` over every line.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        cart_item_count(&self.lines)
    }

    /// Whether any line refers to `id`.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.lines.iter().any(|line| line.id == id)
    }

    /// User-facing message if the initial load failed.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(self.lines.clone())
    }

    /// Append a new line for `item`. Repeated adds create separate lines.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidColor` if `color` is not one of the item's
    /// swatches, or a storage error if the cart cannot be read or written.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub fn add(
        &mut self,
        item: &Item,
        quantity: Quantity,
        color: Option<&str>,
    ) -> Result<CartSnapshot, CartError> {
        let line = CartLineItem::for_item(item, quantity, color)?;

        let mut lines = self.read_current()?;
        lines.push(line);
        let snapshot = self.commit(lines)?;

        info!(lines = snapshot.lines.len(), "Added item to cart");
        Ok(snapshot)
    }

    /// Set the quantity of the first line for `id`. Other lines and fields
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` (writing nothing) if no line has
    /// `id`, or a storage error.
    #[instrument(skip(self))]
    pub fn change_quantity(
        &mut self,
        id: ItemId,
        quantity: Quantity,
    ) -> Result<CartSnapshot, CartError> {
        let mut lines = self.read_current()?;

        let line = lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or(CartError::LineNotFound(id))?;
        line.quantity = quantity;

        self.commit(lines)
    }

    /// Remove every line for `id`. Removing an absent id still rewrites the
    /// slot with the current lines.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the cart cannot be read or written.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: ItemId) -> Result<CartSnapshot, CartError> {
        let mut lines = self.read_current()?;
        lines.retain(|line| line.id != id);
        self.commit(lines)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the slot cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<CartSnapshot, CartError> {
        self.commit(Vec::new())
    }

    /// Read the persisted lines. Malformed data degrades to an empty cart.
    fn read_current(&self) -> Result<Vec<CartLineItem>, CartError> {
        let read = read_slot(&self.store, StorageSlot::CartItems)?;
        Ok(read.value)
    }

    /// Persist `lines` in full, then mirror them in memory.
    fn commit(&mut self, lines: Vec<CartLineItem>) -> Result<CartSnapshot, CartError> {
        write_slot(&self.store, StorageSlot::CartItems, &lines)?;

        let snapshot = CartSnapshot::of(lines);
        self.lines.clone_from(&snapshot.lines);
        self.total = snapshot.total;
        self.load_error = None;
        Ok(snapshot)
    }
}
