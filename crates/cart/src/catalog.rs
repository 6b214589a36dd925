//! Catalog API client: id-keyed product and stock reads.
//!
//! Uses `reqwest` against a plain JSON REST catalog:
//!
//! - `GET products` / `GET products/{id}` - catalog records
//! - `GET stock/{id}` - authoritative availability
//!
//! Product records are cached via `moka` (5-minute TTL); stock is never
//! cached, so every cart mutation observes a fresh availability snapshot.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use shoestring_core::{Product, ProductId, StockRecord};

use crate::config::CatalogConfig;

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when reading from the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog has no record for this product ID.
    #[error("not found: product {0}")]
    NotFound(ProductId),

    /// A request path did not form a valid URL against the base.
    #[error("invalid catalog path {path}: {source}")]
    InvalidPath {
        path: String,
        source: url::ParseError,
    },

    /// The catalog returned an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Client for the product/stock catalog API.
///
/// Cheaply cloneable; product reads are cached for 5 minutes, stock reads
/// always hit the catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: url::Url,
    api_token: Option<String>,
    products: Cache<ProductId, Product>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let products = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.clone(),
                api_token: config
                    .api_token
                    .as_ref()
                    .map(|token| token.expose_secret().to_string()),
                products,
            }),
        }
    }

    /// Execute a GET against a catalog path and parse the JSON body.
    ///
    /// `not_found` names the product a 404 should be attributed to; list
    /// endpoints pass `None` and surface 404 as an unexpected status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        not_found: Option<ProductId>,
    ) -> Result<T, CatalogError> {
        let url = self
            .inner
            .base_url
            .join(path)
            .map_err(|source| CatalogError::InvalidPath {
                path: path.to_string(),
                source,
            })?;

        let mut request = self.inner.client.get(url);
        if let Some(token) = &self.inner.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND
            && let Some(id) = not_found
        {
            return Err(CatalogError::NotFound(id));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// Get a catalog product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the catalog has no such product,
    /// or a transport/parse error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(product) = self.inner.products.get(&id).await {
            debug!("cache hit for product");
            return Ok(product);
        }

        let product: Product = self
            .get_json(&format!("products/{id}"), Some(id))
            .await?;

        self.inner.products.insert(id, product.clone()).await;
        Ok(product)
    }

    /// Get the current stock record for a product ID.
    ///
    /// Never cached: callers rely on observing a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the catalog tracks no stock for
    /// this product, or a transport/parse error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_stock(&self, id: ProductId) -> Result<StockRecord, CatalogError> {
        self.get_json(&format!("stock/{id}"), Some(id)).await
    }

    /// List all catalog products (for browsing; not used by cart mutations).
    ///
    /// # Errors
    ///
    /// Returns a transport/parse error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("products", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(ProductId::new(12));
        assert_eq!(err.to_string(), "not found: product 12");

        let err = CatalogError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 502 Bad Gateway: upstream down");
    }

    #[test]
    fn test_invalid_path_is_not_a_server_status() {
        let source = url::Url::parse("no base").expect_err("relative URL must not parse");
        let err = CatalogError::InvalidPath {
            path: "no base".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid catalog path no base:"));
        assert!(!matches!(err, CatalogError::Status { .. }));
    }
}
