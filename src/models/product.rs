use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — Single catalog record
// ---------------------------------------------------------------------------

/// One product as returned by the catalog endpoint.
///
/// Records are treated as immutable once fetched: the list hands the same
/// value to the detail view without transforming it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Price with two fraction digits, e.g. `$109.95`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

// ---------------------------------------------------------------------------
// Rating — Aggregate review score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: i64,
}
