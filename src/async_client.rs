//! Async front for the list controller, for use inside Tokio runtimes.
//!
//! Catalog fetches run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`] so the event loop (and whatever it renders,
//! e.g. a refresh spinner) keeps running while a request is outstanding.
//!
//! The state lock is only held while a transition is applied, never across
//! a fetch. Overlapping `load`/`refresh` calls are not de-duplicated or
//! cancelled: whichever completes last writes the snapshot.
//!
//! # Example
//!
//! ```no_run
//! use storefront_sdk::{AsyncListController, StorefrontSdk};
//!
//! #[tokio::main]
//! async fn main() -> storefront_sdk::Result<()> {
//!     let list = AsyncListController::from_builder(StorefrontSdk::builder()).await?;
//!     list.load().await?;
//!     for product in list.visible_prefix()? {
//!         println!("{} {}", product.title, product.price_label());
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::{CatalogClient, CatalogSource};
use crate::error::{Result, StorefrontError};
use crate::list::{ListPhase, ListState, ScrollMetrics};
use crate::models::Product;
use crate::navigation::Route;
use crate::StorefrontSdkBuilder;

// ---------------------------------------------------------------------------
// AsyncListController
// ---------------------------------------------------------------------------

/// Shared, cloneable list controller whose fetches never block the caller.
///
/// Clones share the same [`ListState`].
pub struct AsyncListController<S> {
    source: S,
    state: Arc<Mutex<ListState>>,
}

impl<S: Clone> Clone for AsyncListController<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl AsyncListController<CatalogClient> {
    /// Build the HTTP client on the blocking pool and wrap it in a controller.
    pub async fn from_builder(builder: StorefrontSdkBuilder) -> Result<Self> {
        let sdk = tokio::task::spawn_blocking(move || builder.build())
            .await
            .map_err(|e| StorefrontError::Task(format!("Task join error: {e}")))??;
        Ok(Self::new(sdk.catalog().clone()))
    }
}

impl<S> AsyncListController<S>
where
    S: CatalogSource + Clone + Send + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(ListState::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ListState>> {
        self.state
            .lock()
            .map_err(|_| StorefrontError::Task("List state lock poisoned".into()))
    }

    async fn fetch(&self) -> Result<Vec<Product>> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.fetch_catalog())
            .await
            .map_err(|e| StorefrontError::Task(format!("Task join error: {e}")))?
    }

    pub async fn load(&self) -> Result<()> {
        self.lock()?.begin_load();
        let result = self.fetch().await;
        self.lock()?.finish_load(result)
    }

    pub async fn refresh(&self) -> Result<()> {
        self.lock()?.begin_refresh();
        let result = self.fetch().await;
        self.lock()?.finish_refresh(result)
    }

    pub async fn retry(&self) -> Result<()> {
        self.load().await
    }

    pub fn reveal_more(&self) -> Result<()> {
        let mut guard = self.lock()?;
        let state = std::mem::take(&mut *guard);
        *guard = state.reveal_more();
        Ok(())
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) -> Result<bool> {
        let mut guard = self.lock()?;
        let state = std::mem::take(&mut *guard);
        let (state, revealed) = state.scrolled(metrics);
        *guard = state;
        Ok(revealed)
    }

    /// A copy of the current state.
    pub fn state(&self) -> Result<ListState> {
        Ok(self.lock()?.clone())
    }

    pub fn phase(&self) -> Result<ListPhase> {
        Ok(self.lock()?.phase())
    }

    pub fn visible_prefix(&self) -> Result<Vec<Product>> {
        Ok(self.lock()?.visible_prefix().to_vec())
    }

    pub fn has_more(&self) -> Result<bool> {
        Ok(self.lock()?.has_more())
    }

    pub fn open(&self, index: usize) -> Result<Route> {
        self.lock()?.open(index)
    }
}
