//! HTTP client for the read-only catalog endpoint.

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use shopfront_core::{Item, ItemId};
use tracing::{debug, instrument};
use url::Url;

use super::CatalogError;
use super::cache::{CacheKey, CacheValue};
use crate::config::CatalogClientConfig;

/// Longest slice of an error body kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 200;

/// Client for the catalog endpoint.
///
/// Cheap to clone; clones share the connection pool and cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Option<Cache<CacheKey, CacheValue>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CatalogClientConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let cache = config.cache_ttl.map(|ttl| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(ttl)
                .build()
        });

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.clone(),
                cache,
            }),
        })
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// GET `path` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.inner.base_url.join(path)?;

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                path,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Fetch the full item collection in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that is not an array of items.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Arc<Vec<Item>>, CatalogError> {
        if let Some(cache) = &self.inner.cache
            && let Some(CacheValue::Items(items)) = cache.get(&CacheKey::Items).await
        {
            debug!("Cache hit for item list");
            return Ok(items);
        }

        let items: Arc<Vec<Item>> = Arc::new(self.get_json("items").await?);
        debug!(count = items.len(), "Fetched catalog items");

        if let Some(cache) = &self.inner.cache {
            cache
                .insert(CacheKey::Items, CacheValue::Items(Arc::clone(&items)))
                .await;
        }

        Ok(items)
    }

    /// Fetch a single item by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the endpoint answers 404, or any
    /// other `CatalogError` on failure.
    #[instrument(skip(self), fields(item_id = %id))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, CatalogError> {
        let cache_key = CacheKey::Item(id);

        if let Some(cache) = &self.inner.cache
            && let Some(CacheValue::Item(item)) = cache.get(&cache_key).await
        {
            debug!("Cache hit for item");
            return Ok(*item);
        }

        let item: Item = match self.get_json(&format!("items/{id}")).await {
            Ok(item) => item,
            Err(CatalogError::Status { status: 404, .. }) => {
                return Err(CatalogError::NotFound(id));
            }
            Err(e) => return Err(e),
        };

        if let Some(cache) = &self.inner.cache {
            cache
                .insert(cache_key, CacheValue::Item(Box::new(item.clone())))
                .await;
        }

        Ok(item)
    }

    /// Drop every cached response.
    pub fn invalidate(&self) {
        if let Some(cache) = &self.inner.cache {
            cache.invalidate_all();
        }
    }
}
