//! Published media item record.

use serde::{Deserialize, Serialize};

use crate::domain::schema::ValidationError;

/// Media item in the content feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Display title.
    pub title: String,
    /// Media kind tag, e.g. `video`, `tutorial`, `reel`, `youtube`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the media.
    pub url: String,
    /// Thumbnail image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl MediaItem {
    /// Enforce field-level rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::new("url", "must not be empty"));
        }
        Ok(())
    }
}
