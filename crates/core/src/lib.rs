//! Shopfront Core - Shared types and pure storefront logic.
//!
//! This crate provides the pieces used by every Shopfront component:
//! - `storefront` - Client-side catalog view, cart and favorites state
//! - `catalog` - Read-only catalog endpoint server
//! - `cli` - Terminal front end
//!
//! # Architecture
//!
//! The core crate contains only types, pure functions and traits - no I/O,
//! no HTTP clients. Persistence is expressed as the [`store::KeyValueStore`]
//! trait so callers can plug in a real or in-memory backend.
//!
//! # Modules
//!
//! - [`types`] - Item, cart line, filter specification, ids, quantities, prices
//! - [`catalog`] - Filter/search engine, pagination engine, facets
//! - [`store`] - Key-value persistence contract

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod store;
pub mod types;

pub use types::*;
