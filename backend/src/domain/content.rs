//! Read-only content feeds: testimonials, media, community events.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::DomainResult;
use crate::domain::documents::{Filter, normalize_document};
use crate::domain::ports::DocumentStore;
use crate::domain::schema::EntityKind;

/// Upper bound on media listings.
pub(crate) const MEDIA_QUERY_LIMIT: usize = 50;
/// Upper bound on testimonial listings.
pub(crate) const TESTIMONIAL_QUERY_LIMIT: usize = 20;
/// Upper bound on community event listings.
pub(crate) const EVENT_QUERY_LIMIT: usize = 20;

/// Bounded, normalized reads over the content collections.
///
/// All three feeds degrade to empty results when the store is unconfigured;
/// they never fail for lack of a database.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn DocumentStore>,
}

impl ContentService {
    /// Create a content service over the given store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Most recent testimonials, normalized.
    pub async fn testimonials(&self) -> DomainResult<Vec<Value>> {
        self.list(EntityKind::Testimonial, TESTIMONIAL_QUERY_LIMIT).await
    }

    /// Published media items, normalized.
    pub async fn media_items(&self) -> DomainResult<Vec<Value>> {
        self.list(EntityKind::MediaItem, MEDIA_QUERY_LIMIT).await
    }

    /// Announced community events, normalized.
    pub async fn community_events(&self) -> DomainResult<Vec<Value>> {
        self.list(EntityKind::CommunityEvent, EVENT_QUERY_LIMIT).await
    }

    async fn list(&self, kind: EntityKind, limit: usize) -> DomainResult<Vec<Value>> {
        let items = self.store.find(kind.collection(), Filter::new(), limit).await?;
        Ok(items.into_iter().map(normalize_document).collect())
    }
}
