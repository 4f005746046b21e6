//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::validation::{ensure_non_negative_amount, ensure_non_negative_count, ensure_rating_range};
use crate::domain::schema::ValidationError;

/// Item offered in the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display title.
    pub title: String,
    /// Longer description shown on detail pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit price; must be >= 0.
    pub price: f64,
    /// Free-form category tag, e.g. `audio`, `ebook`, `merchandise`.
    pub category: String,
    /// Image reference served by the media host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Remaining stock; `None` means not tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    /// Star rating on a 0–5 scale; defaults to 4.9.
    #[serde(default = "default_rating")]
    pub rating: Option<f64>,
}

fn default_rating() -> Option<f64> {
    Some(4.9)
}

impl Product {
    /// Enforce the numeric bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative_amount(self.price, "price")?;
        if let Some(stock) = self.stock {
            ensure_non_negative_count(stock, "stock")?;
        }
        if let Some(rating) = self.rating {
            ensure_rating_range(rating, 0.0, 5.0, "rating")?;
        }
        Ok(())
    }
}
