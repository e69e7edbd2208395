//! Core domain types for Shopfront.
//!
//! This module provides type-safe wrappers for catalog and cart concepts.

pub mod cart;
pub mod filter;
pub mod id;
pub mod item;
pub mod price;
pub mod quantity;

pub use cart::{CartLineItem, UnknownSwatchError, cart_item_count, cart_total};
pub use filter::FilterSpec;
pub use id::*;
pub use item::Item;
pub use price::{PriceError, format_amount, parse_amount};
pub use quantity::{Quantity, QuantityError};
