//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data`, so they only
//! depend on domain services and remain testable against the in-memory
//! store. The store handle is constructed once and injected — there is no
//! process-wide connection singleton.

use std::sync::Arc;

use crate::domain::ports::{DocumentStore, UnconfiguredDocumentStore};
use crate::domain::{
    CatalogService, CheckoutService, ContentService, IntakeService, SchemaRegistry,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Product catalog reads with seed-on-empty.
    pub catalog: CatalogService,
    /// Cart aggregation and order persistence.
    pub checkout: CheckoutService,
    /// Enrollment and contact submissions.
    pub intake: IntakeService,
    /// Testimonial, media, and community event feeds.
    pub content: ContentService,
    /// Raw store handle, used by the diagnostics endpoint.
    pub store: Arc<dyn DocumentStore>,
    database_configured: bool,
}

impl HttpState {
    /// Construct state over a configured document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_availability(store, true)
    }

    /// Construct state for a deployment without a database; reads degrade
    /// to empty results and writes fail with a service-unavailable error.
    pub fn unconfigured() -> Self {
        Self::with_availability(Arc::new(UnconfiguredDocumentStore), false)
    }

    fn with_availability(store: Arc<dyn DocumentStore>, database_configured: bool) -> Self {
        let registry = SchemaRegistry::new();
        Self {
            catalog: CatalogService::new(Arc::clone(&store), registry),
            checkout: CheckoutService::new(Arc::clone(&store), registry),
            intake: IntakeService::new(Arc::clone(&store), registry),
            content: ContentService::new(Arc::clone(&store)),
            store,
            database_configured,
        }
    }

    /// Whether a real store was wired at startup.
    pub fn database_configured(&self) -> bool {
        self.database_configured
    }
}
