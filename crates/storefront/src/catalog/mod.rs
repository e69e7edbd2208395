//! Catalog endpoint client.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP: `GET /items` and `GET /items/{id}`
//! - The catalog is read-only; items are never written back
//! - In-memory caching via `moka` for responses (configurable TTL)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_storefront::catalog::CatalogClient;
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let items = client.list_items().await?;
//! let item = client.get_item(ItemId::new(3)).await?;
//! ```

mod cache;
mod client;

pub use client::CatalogClient;

use shopfront_core::ItemId;
use thiserror::Error;

/// Errors that can occur when talking to the catalog endpoint.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested item does not exist.
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// The request URL could not be built.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl CatalogError {
    /// Whether this is a network failure (transport error or non-2xx status).
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Message suitable for showing inline to a shopper.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Product not found.".to_string(),
            Self::Http(_) | Self::Status { .. } => {
                "Fetch error: Network response was not ok".to_string()
            }
            Self::Parse(_) | Self::InvalidUrl(_) => "Failed to fetch products.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(ItemId::new(123));
        assert_eq!(err.to_string(), "Item not found: 123");

        let err = CatalogError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog returned HTTP 503: down");
    }

    #[test]
    fn test_is_network() {
        let status = CatalogError::Status {
            status: 500,
            body: String::new(),
        };
        assert!(status.is_network());
        assert!(!CatalogError::NotFound(ItemId::new(1)).is_network());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            CatalogError::NotFound(ItemId::new(1)).user_message(),
            "Product not found."
        );
        let status = CatalogError::Status {
            status: 502,
            body: String::new(),
        };
        assert!(status.user_message().contains("Network response was not ok"));
    }
}
