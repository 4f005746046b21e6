//! Community event record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::schema::ValidationError;

/// Announced community event, optionally with a photo gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityEvent {
    /// Event title.
    pub title: String,
    /// Scheduled date and time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Venue or city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Event description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Gallery image references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

impl CommunityEvent {
    /// Enforce field-level rules. Every field beyond the title is optional
    /// and unbounded, so there is nothing to check today.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
