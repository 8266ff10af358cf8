//! List controller: an in-memory catalog snapshot with a growing visible window.
//!
//! Windowing is done entirely client-side over a fully fetched catalog. The
//! window starts at [`INITIAL_VISIBLE_COUNT`] products and grows by
//! [`REVEAL_STEP`] whenever the display layer reports that the user scrolled
//! close to the end of what is currently rendered.
//!
//! State transitions live on [`ListState`] and carry no I/O, so they can be
//! driven from any event loop. [`ListController`] pairs a state with an
//! injected [`CatalogSource`] for the fetching operations.

use tracing::{debug, info, warn};

use crate::catalog::CatalogSource;
use crate::config::{END_REACHED_THRESHOLD, INITIAL_VISIBLE_COUNT, REVEAL_STEP};
use crate::error::{Result, StorefrontError};
use crate::models::Product;
use crate::navigation::Route;
use crate::view::ProductCard;

// ---------------------------------------------------------------------------
// ScrollMetrics
// ---------------------------------------------------------------------------

/// Scroll position reported by the display layer, in any consistent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Offset of the top of the viewport from the start of the content.
    pub offset: f64,
    /// Height (or width) of the viewport.
    pub viewport_len: f64,
    /// Total length of the rendered content.
    pub content_len: f64,
}

impl ScrollMetrics {
    /// Distance between the bottom of the viewport and the end of the content.
    pub fn distance_from_end(&self) -> f64 {
        self.content_len - (self.offset + self.viewport_len)
    }

    /// True when the end is within `threshold` viewport lengths.
    pub fn is_near_end(&self, threshold: f64) -> bool {
        self.distance_from_end() <= threshold * self.viewport_len
    }
}

// ---------------------------------------------------------------------------
// ListPhase
// ---------------------------------------------------------------------------

/// Coarse state for the display layer to pick a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    /// Nothing requested yet.
    Idle,
    /// First load in flight and no snapshot to show.
    Loading,
    /// A snapshot is available (a refresh may be in flight).
    Ready,
    /// The load failed and there is nothing to show; offer a retry.
    Failed { message: String },
}

// ---------------------------------------------------------------------------
// ListState
// ---------------------------------------------------------------------------

/// Snapshot, visible-count cursor and fetch flags of the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    snapshot: Option<Vec<Product>>,
    visible_count: usize,
    loading: bool,
    refreshing: bool,
    last_error: Option<String>,
    end_reached_at: Option<f64>,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            visible_count: INITIAL_VISIBLE_COUNT,
            loading: false,
            refreshing: false,
            last_error: None,
            end_reached_at: None,
        }
    }

    pub fn snapshot(&self) -> Option<&[Product]> {
        self.snapshot.as_deref()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Message of the most recent failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn len(&self) -> usize {
        self.snapshot.as_ref().map_or(0, Vec::len)
    }

    /// The first `visible_count` products, or nothing when no snapshot exists.
    ///
    /// `visible_count` may exceed the snapshot length; the slice is capped.
    pub fn visible_prefix(&self) -> &[Product] {
        match &self.snapshot {
            Some(products) => &products[..self.visible_count.min(products.len())],
            None => &[],
        }
    }

    /// Whether part of the snapshot is still hidden.
    pub fn has_more(&self) -> bool {
        self.visible_count < self.len()
    }

    /// Grow the window by [`REVEAL_STEP`] if anything is still hidden.
    ///
    /// Once everything is revealed (or with no snapshot) the state is
    /// returned unchanged, so redundant calls are harmless.
    pub fn reveal_more(mut self) -> Self {
        if self.has_more() {
            self.visible_count += REVEAL_STEP;
        }
        self
    }

    /// Record a scroll event and report whether it counts as a new
    /// end-reached trigger.
    ///
    /// A trigger fires at most once per content length: repeated events
    /// while the rendered list has not grown are ignored. Scrolling back out
    /// of the threshold re-arms the trigger.
    pub fn note_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !metrics.is_near_end(END_REACHED_THRESHOLD) {
            self.end_reached_at = None;
            return false;
        }
        if self.end_reached_at == Some(metrics.content_len) {
            return false;
        }
        self.end_reached_at = Some(metrics.content_len);
        true
    }

    /// Apply a scroll event: reveal more on a new end-reached trigger.
    ///
    /// The flag is `true` only if the window actually grew.
    pub fn scrolled(mut self, metrics: ScrollMetrics) -> (Self, bool) {
        if !self.note_scroll(metrics) {
            return (self, false);
        }
        let before = self.visible_count;
        let next = self.reveal_more();
        debug!(
            before,
            after = next.visible_count,
            "end of list reached"
        );
        let revealed = next.visible_count != before;
        (next, revealed)
    }

    pub fn phase(&self) -> ListPhase {
        if self.snapshot.is_some() {
            return ListPhase::Ready;
        }
        if self.loading || self.refreshing {
            return ListPhase::Loading;
        }
        match &self.last_error {
            Some(message) => ListPhase::Failed {
                message: message.clone(),
            },
            None => ListPhase::Idle,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a load. The error, if any, is passed back.
    pub fn finish_load(&mut self, result: Result<Vec<Product>>) -> Result<()> {
        self.loading = false;
        match result {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded");
                self.snapshot = Some(products);
                self.end_reached_at = None;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog load failed");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    /// Apply the outcome of a refresh.
    ///
    /// On success the snapshot is replaced wholesale; `visible_count` is
    /// left where it was. On failure the previous snapshot is kept.
    pub fn finish_refresh(&mut self, result: Result<Vec<Product>>) -> Result<()> {
        self.refreshing = false;
        match result {
            Ok(products) => {
                info!(
                    count = products.len(),
                    visible_count = self.visible_count,
                    "catalog snapshot replaced"
                );
                self.snapshot = Some(products);
                self.end_reached_at = None;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog refresh failed");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Build the detail route for row `index` of the visible prefix.
    pub fn open(&self, index: usize) -> Result<Route> {
        let visible = self.visible_prefix();
        let product = visible.get(index).ok_or_else(|| {
            StorefrontError::Navigation(format!(
                "Row {} is outside the visible list of {} products",
                index,
                visible.len()
            ))
        })?;
        Ok(Route::ProductDetail {
            product: product.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// ListController
// ---------------------------------------------------------------------------

/// Owns a [`ListState`] and the [`CatalogSource`] that fills it.
pub struct ListController<S: CatalogSource> {
    source: S,
    state: ListState,
}

impl<S: CatalogSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ListState::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Initial fetch. On failure the snapshot stays absent and the error
    /// is returned; [`ListState::phase`] reports `Failed`.
    pub fn load(&mut self) -> Result<()> {
        self.state.begin_load();
        let result = self.source.fetch_catalog();
        self.state.finish_load(result)
    }

    /// Re-fetch and replace the snapshot. `refreshing` is cleared either way.
    pub fn refresh(&mut self) -> Result<()> {
        self.state.begin_refresh();
        let result = self.source.fetch_catalog();
        self.state.finish_refresh(result)
    }

    /// Retry after a failed [`load`](Self::load).
    pub fn retry(&mut self) -> Result<()> {
        debug!("retrying catalog load");
        self.load()
    }

    pub fn reveal_more(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reveal_more();
    }

    /// Feed a scroll event. Returns `true` when it revealed more products.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, revealed) = state.scrolled(metrics);
        self.state = state;
        revealed
    }

    pub fn visible_prefix(&self) -> &[Product] {
        self.state.visible_prefix()
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// List rows for the visible prefix.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible_prefix().iter().map(ProductCard::from).collect()
    }

    pub fn open(&self, index: usize) -> Result<Route> {
        self.state.open(index)
    }
}
