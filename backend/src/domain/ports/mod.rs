//! Domain ports: traits the outbound adapters implement.

mod document_store;

pub use self::document_store::{
    DocumentStore, DocumentStoreError, SeedOutcome, UnconfiguredDocumentStore,
};

#[cfg(test)]
pub use self::document_store::MockDocumentStore;
