//! Catalog client: the single read request against the remote product API.
//!
//! The client is stateless beyond its HTTP connection pool. It never retries,
//! never caches and never sorts; whatever the remote returns is handed back
//! as-is, and every failure collapses into [`StorefrontError::Fetch`].

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use crate::config;
use crate::error::{Result, StorefrontError};
use crate::models::Product;

// ---------------------------------------------------------------------------
// CatalogSource
// ---------------------------------------------------------------------------

/// Anything that can produce a full catalog snapshot.
///
/// [`ListController`](crate::list::ListController) depends on this trait
/// rather than on [`CatalogClient`] directly, so the HTTP client is injected
/// instead of living in a process-wide global.
pub trait CatalogSource {
    /// Fetch the complete, ordered product list in one request.
    fn fetch_catalog(&self) -> Result<Vec<Product>>;
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the product catalog endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Build a client for `base_url`.
    ///
    /// Every request carries a JSON content type. When `bearer_token` is
    /// `Some` and non-empty, an `Authorization: Bearer ...` header is added
    /// as well.
    pub fn new(base_url: &str, timeout: Duration, bearer_token: Option<&str>) -> Result<Self> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| {
            StorefrontError::InvalidArgument(format!("Invalid base URL '{}': {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StorefrontError::InvalidArgument(format!(
                "Unsupported URL scheme '{}'",
                parsed.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = bearer_token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                StorefrontError::InvalidArgument("Bearer token contains invalid characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Base URL requests are resolved against (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// Non-2xx statuses and undecodable bodies are errors. Failures are
    /// logged before being returned to the caller.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = config::join_url(&self.base_url, path);
        debug!(%url, "GET");

        let result = (|| -> Result<T> {
            let resp = self.http.get(&url).send()?.error_for_status()?;
            Ok(resp.json::<T>()?)
        })();

        if let Err(e) = &result {
            error!(%url, error = %e, "GET request failed");
        }
        result
    }

    /// Fetch a single product by id.
    pub fn fetch_product(&self, id: i64) -> Result<Product> {
        self.get_json(&format!("{}/{}", config::PRODUCTS_PATH, id))
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_catalog(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.get_json(config::PRODUCTS_PATH)?;
        debug!(count = products.len(), "catalog fetched");
        Ok(products)
    }
}
