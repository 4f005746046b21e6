//! Student testimonial record.

use serde::{Deserialize, Serialize};

use super::validation::ensure_rating_range;
use crate::domain::schema::ValidationError;

/// Testimonial shown on the journey page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Author name.
    pub name: String,
    /// Testimonial text.
    pub content: String,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Source platform tag; defaults to `student`.
    #[serde(default = "default_platform")]
    pub platform: Option<String>,
    /// Star rating on a 1–5 scale; defaults to 5.
    #[serde(default = "default_rating")]
    pub rating: Option<i64>,
}

fn default_platform() -> Option<String> {
    Some("student".to_owned())
}

fn default_rating() -> Option<i64> {
    Some(5)
}

impl Testimonial {
    /// Enforce the rating bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rating) = self.rating {
            ensure_rating_range(rating as f64, 1.0, 5.0, "rating")?;
        }
        Ok(())
    }
}
