//! Typed navigation between the product list and the product detail screen.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StorefrontError};
use crate::models::Product;

pub const PRODUCT_LIST: &str = "ProductList";
pub const PRODUCT_DETAIL: &str = "ProductDetail";

/// A screen together with the payload it requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    ProductList,
    ProductDetail { product: Product },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::ProductList => PRODUCT_LIST,
            Route::ProductDetail { .. } => PRODUCT_DETAIL,
        }
    }

    /// Validate an untyped transition (route name plus JSON params).
    ///
    /// `ProductDetail` needs a `product` field that decodes into a full
    /// [`Product`]; anything else is rejected instead of failing later.
    pub fn from_params(name: &str, params: Option<&Value>) -> Result<Self> {
        match name {
            PRODUCT_LIST => Ok(Route::ProductList),
            PRODUCT_DETAIL => {
                let raw = params.and_then(|p| p.get("product")).ok_or_else(|| {
                    StorefrontError::Navigation(format!(
                        "{} requires a 'product' parameter",
                        PRODUCT_DETAIL
                    ))
                })?;
                let product = Product::deserialize(raw).map_err(|e| {
                    StorefrontError::Navigation(format!("Malformed 'product' parameter: {}", e))
                })?;
                Ok(Route::ProductDetail { product })
            }
            other => Err(StorefrontError::Navigation(format!(
                "Unknown route: {}",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Stack of routes rooted at the product list.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::ProductList],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the top route. Returns `false` when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}
