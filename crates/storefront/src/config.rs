//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOP_CATALOG_URL` - Base URL of the catalog endpoint (default: `http://localhost:5000/`)
//! - `SHOP_DATA_DIR` - Directory for persisted cart and favorites (default: `.shopfront`)
//! - `SHOP_CATALOG_CACHE_TTL_SECS` - Catalog cache TTL, `0` disables caching (default: 300)
//! - `SHOP_REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_URL: &str = "http://localhost:5000/";
const DEFAULT_DATA_DIR: &str = ".shopfront";
const DEFAULT_CACHE_TTL_SECS: &str = "300";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Catalog endpoint settings
    pub catalog: CatalogClientConfig,
    /// Directory backing the persistent key-value store
    pub data_dir: PathBuf,
}

/// Catalog endpoint client configuration.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL; always ends with `/` so relative paths join beneath it
    pub base_url: Url,
    /// How long fetched items stay cached, `None` to disable caching
    pub cache_ttl: Option<Duration>,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            catalog: CatalogClientConfig::from_env()?,
            data_dir: PathBuf::from(get_env_or_default("SHOP_DATA_DIR", DEFAULT_DATA_DIR)),
        })
    }
}

impl CatalogClientConfig {
    /// Configuration pointing at `base_url` with default cache and timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("SHOP_CATALOG_URL", base_url)?,
            cache_ttl: Some(Duration::from_secs(300)),
            request_timeout: Duration::from_secs(10),
        })
    }

    /// Disable the item cache.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache_ttl = None;
        self
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            "SHOP_CATALOG_URL",
            &get_env_or_default("SHOP_CATALOG_URL", DEFAULT_CATALOG_URL),
        )?;
        let cache_ttl_secs = parse_secs("SHOP_CATALOG_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let timeout_secs = parse_secs("SHOP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            cache_ttl: (cache_ttl_secs > 0).then(|| Duration::from_secs(cache_ttl_secs)),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a seconds value from the environment.
fn parse_secs(key: &str, default: &str) -> Result<u64, ConfigError> {
    get_env_or_default(key, default)
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a base URL, forcing a trailing slash so `Url::join` appends paths.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be an absolute http(s) URL".to_string(),
        ));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
