//! Intake service for enrollment and contact submissions.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::DomainResult;
use crate::domain::documents::DocumentId;
use crate::domain::ports::DocumentStore;
use crate::domain::schema::{EntityKind, SchemaRegistry};

/// Validates a submission and persists it in the collection for its kind.
#[derive(Clone)]
pub struct IntakeService {
    store: Arc<dyn DocumentStore>,
    registry: SchemaRegistry,
}

impl IntakeService {
    /// Create an intake service over the given store.
    pub fn new(store: Arc<dyn DocumentStore>, registry: SchemaRegistry) -> Self {
        Self { store, registry }
    }

    /// Validate `raw` as a record of `kind` and persist it.
    ///
    /// Validation failures reject the submission before anything reaches the
    /// store, so a failed submission leaves zero persisted records.
    pub async fn submit(&self, kind: EntityKind, raw: Value) -> DomainResult<DocumentId> {
        let record = self.registry.validate(kind, raw)?;
        Ok(self.store.insert(kind.collection(), record.into_body()).await?)
    }
}
