//! Port abstraction over the collection-indexed document store.
//!
//! The store is generic: records are addressed by collection name and a
//! store-assigned identifier, and the domain never sees connection details.
//! Adapters must provide atomic single-record inserts; `seed_if_absent` is
//! the only multi-step operation and must be atomic with respect to
//! concurrent callers so default-data seeding cannot be applied twice.

use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

use crate::domain::documents::{Document, DocumentId, Filter};
use crate::domain::error::Error;

/// Persistence errors raised by document store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    /// No store was configured; reads degrade, writes fail.
    #[error("document store is not configured")]
    Unconfigured,
    /// The underlying connection could not be established.
    #[error("document store connection failed: {message}")]
    Connection {
        /// Raw diagnostics from the adapter; never forwarded to clients.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("document store query failed: {message}")]
    Query {
        /// Raw diagnostics from the adapter; never forwarded to clients.
        message: String,
    },
}

impl DocumentStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<DocumentStoreError> for Error {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::Unconfigured => {
                Self::service_unavailable("document store is not configured")
            }
            DocumentStoreError::Connection { .. } | DocumentStoreError::Query { .. } => {
                error!(error = %err, "document store operation failed");
                Self::internal(err.to_string())
            }
        }
    }
}

/// Result of a guarded seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The marker was recorded and the records were inserted.
    Applied,
    /// The marker already existed; nothing was inserted.
    AlreadySeeded,
}

/// Generic create/read port over named collections.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one validated record, returning its store-assigned identifier.
    async fn insert(&self, collection: &str, body: Value) -> Result<DocumentId, DocumentStoreError>;

    /// Return up to `limit` records matching `filter`, in insertion order.
    /// An empty filter matches every record in the collection.
    async fn find(
        &self,
        collection: &str,
        filter: Filter,
        limit: usize,
    ) -> Result<Vec<Document>, DocumentStoreError>;

    /// Atomically record `seed_key` and insert `bodies` into `collection`
    /// only if the key was absent. Concurrent callers converge on exactly
    /// one application of the seed.
    async fn seed_if_absent(
        &self,
        seed_key: &str,
        collection: &str,
        bodies: Vec<Value>,
    ) -> Result<SeedOutcome, DocumentStoreError>;

    /// Names of the non-empty collections, for diagnostics.
    async fn collection_names(&self) -> Result<Vec<String>, DocumentStoreError>;
}

/// Store stand-in used when no database is configured.
///
/// Reads return empty results so content endpoints degrade to "nothing to
/// show"; writes fail with [`DocumentStoreError::Unconfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredDocumentStore;

#[async_trait]
impl DocumentStore for UnconfiguredDocumentStore {
    async fn insert(
        &self,
        _collection: &str,
        _body: Value,
    ) -> Result<DocumentId, DocumentStoreError> {
        Err(DocumentStoreError::Unconfigured)
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: Filter,
        _limit: usize,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(Vec::new())
    }

    async fn seed_if_absent(
        &self,
        _seed_key: &str,
        _collection: &str,
        _bodies: Vec<Value>,
    ) -> Result<SeedOutcome, DocumentStoreError> {
        Err(DocumentStoreError::Unconfigured)
    }

    async fn collection_names(&self) -> Result<Vec<String>, DocumentStoreError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::error::ErrorCode;
    use serde_json::json;

    #[tokio::test]
    async fn unconfigured_store_degrades_reads_and_rejects_writes() {
        let store = UnconfiguredDocumentStore;
        let found = store
            .find("product", Filter::new(), 10)
            .await
            .expect("reads degrade to empty");
        assert!(found.is_empty());

        let error = store
            .insert("product", json!({}))
            .await
            .expect_err("writes must fail");
        assert_eq!(error, DocumentStoreError::Unconfigured);
    }

    #[test]
    fn unconfigured_error_maps_to_service_unavailable() {
        let error = Error::from(DocumentStoreError::Unconfigured);
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[test]
    fn connection_error_maps_to_internal_with_diagnostics() {
        let error = Error::from(DocumentStoreError::connection("refused"));
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains("refused"));
    }
}
