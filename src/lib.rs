//! Storefront SDK for Rust.
//!
//! Browses a remote product catalog: one request fetches the whole catalog,
//! a [`ListController`] exposes a growing window over it as the user scrolls,
//! and a [`DetailPresenter`] renders a single product handed over through a
//! typed [`Route`].
//!
//! # Quick start
//!
//! ```no_run
//! use storefront_sdk::{DetailPresenter, Route, StorefrontSdk};
//!
//! let sdk = StorefrontSdk::builder().build().unwrap();
//! let mut list = sdk.list_controller();
//! list.load().unwrap();
//!
//! for card in list.cards() {
//!     println!("{card}");
//! }
//!
//! if let Route::ProductDetail { product } = list.open(0).unwrap() {
//!     println!("{}", DetailPresenter::render(&product));
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod list;
pub mod models;
pub mod navigation;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncListController;
pub use catalog::{CatalogClient, CatalogSource};
pub use error::{Result, StorefrontError};
pub use list::{ListController, ListPhase, ListState, ScrollMetrics};
pub use models::{Product, Rating};
pub use navigation::{Navigator, Route};
pub use view::{DetailPresenter, DetailView, ProductCard};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct StorefrontSdkBuilder {
    base_url: String,
    timeout: Duration,
    bearer_token: Option<String>,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            bearer_token: None,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Set the catalog API base URL.
    ///
    /// Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    ///
    /// No token is sent by default.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Validate the configuration and build the HTTP client.
    pub fn build(self) -> Result<StorefrontSdk> {
        let catalog =
            CatalogClient::new(&self.base_url, self.timeout, self.bearer_token.as_deref())?;
        Ok(StorefrontSdk {
            catalog,
            timeout: self.timeout,
        })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Owns one [`CatalogClient`] and hands it to every controller it creates,
/// so all screens share the same connection pool without a global instance.
pub struct StorefrontSdk {
    catalog: CatalogClient,
    timeout: Duration,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    /// Access the catalog client.
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Create a list controller backed by this SDK's catalog client.
    ///
    /// Nothing is fetched until [`ListController::load`] is called.
    pub fn list_controller(&self) -> ListController<CatalogClient> {
        ListController::new(self.catalog.clone())
    }

    /// Fetch one product directly, bypassing the list.
    pub fn product(&self, id: i64) -> Result<Product> {
        self.catalog.fetch_product(id)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StorefrontSdk(base_url={}, timeout={}s)",
            self.catalog.base_url(),
            self.timeout.as_secs()
        )
    }
}
