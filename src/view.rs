//! Display-ready view models for list rows and the detail screen.

use std::fmt;

use serde::Serialize;

use crate::models::Product;

// ---------------------------------------------------------------------------
// ProductCard — one row of the product list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    /// Stable row key, the product id as text.
    pub key: String,
    pub title: String,
    pub category: String,
    pub price_label: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price_label: product.price_label(),
            image: product.image.clone(),
        }
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) {}",
            self.key, self.title, self.category, self.price_label
        )
    }
}

// ---------------------------------------------------------------------------
// DetailView — the product detail screen
// ---------------------------------------------------------------------------

pub const DESCRIPTION_HEADER: &str = "Description";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub image: String,
    pub title: String,
    pub category: String,
    pub price_label: String,
    pub description_header: &'static str,
    pub description: String,
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.category)?;
        writeln!(f, "{}", self.price_label)?;
        writeln!(f, "Image: {}", self.image)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description_header)?;
        write!(f, "{}", self.description)
    }
}

/// Renders one product for the detail screen. Holds no state and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPresenter;

impl DetailPresenter {
    pub fn render(product: &Product) -> DetailView {
        DetailView {
            image: product.image.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            price_label: product.price_label(),
            description_header: DESCRIPTION_HEADER,
            description: product.description.clone(),
        }
    }
}
