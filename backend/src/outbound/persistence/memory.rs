//! In-memory document store adapter.
//!
//! Mirrors the PostgreSQL adapter's semantics — insertion order, bounded
//! reads, and an atomic seed marker — behind a single mutex. One lock
//! covers the marker check and the record inserts, so `seed_if_absent` is
//! atomic with respect to concurrent callers.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::documents::{Document, DocumentId, Filter};
use crate::domain::ports::{DocumentStore, DocumentStoreError, SeedOutcome};

/// In-process implementation of the document store port.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Document>>,
    seed_keys: HashSet<String>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a panicking test; the data is still
        // coherent for reads.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn matches_filter(body: &Value, filter: &Filter) -> bool {
    if filter.is_empty() {
        return true;
    }
    let Value::Object(fields) = body else {
        return false;
    };
    filter
        .iter()
        .all(|(key, expected)| fields.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<DocumentId, DocumentStoreError> {
        let id = DocumentId::generate();
        let mut inner = self.lock();
        inner
            .collections
            .entry(collection.to_owned())
            .or_default()
            .push(Document { id, body });
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Filter,
        limit: usize,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let inner = self.lock();
        Ok(inner
            .collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| matches_filter(&record.body, &filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn seed_if_absent(
        &self,
        seed_key: &str,
        collection: &str,
        bodies: Vec<Value>,
    ) -> Result<SeedOutcome, DocumentStoreError> {
        let mut inner = self.lock();
        if !inner.seed_keys.insert(seed_key.to_owned()) {
            return Ok(SeedOutcome::AlreadySeeded);
        }
        let records = inner.collections.entry(collection.to_owned()).or_default();
        for body in bodies {
            records.push(Document {
                id: DocumentId::generate(),
                body,
            });
        }
        Ok(SeedOutcome::Applied)
    }

    async fn collection_names(&self) -> Result<Vec<String>, DocumentStoreError> {
        let inner = self.lock();
        let mut names: Vec<String> = inner
            .collections
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn find_preserves_insertion_order_and_limit() {
        let store = MemoryDocumentStore::new();
        for index in 0..5 {
            store
                .insert("product", json!({ "index": index }))
                .await
                .expect("insert succeeds");
        }

        let found = store
            .find("product", Filter::new(), 3)
            .await
            .expect("find succeeds");
        let indices: Vec<i64> = found
            .iter()
            .filter_map(|record| record.body["index"].as_i64())
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn find_applies_equality_filters() {
        let store = MemoryDocumentStore::new();
        store
            .insert("product", json!({ "category": "audio" }))
            .await
            .expect("insert succeeds");
        store
            .insert("product", json!({ "category": "ebook" }))
            .await
            .expect("insert succeeds");

        let mut filter = Filter::new();
        filter.insert("category".to_owned(), json!("ebook"));
        let found = store
            .find("product", filter, 10)
            .await
            .expect("find succeeds");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].body["category"], json!("ebook"));
    }

    #[tokio::test]
    async fn unknown_collection_reads_empty() {
        let store = MemoryDocumentStore::new();
        let found = store
            .find("missing", Filter::new(), 10)
            .await
            .expect("find succeeds");
        assert!(found.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_seeds_apply_exactly_once() {
        let store = Arc::new(MemoryDocumentStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .seed_if_absent("marker", "product", vec![json!({ "t": 1 }), json!({ "t": 2 })])
                    .await
            }));
        }

        let mut applied = 0;
        for handle in handles {
            let outcome = handle
                .await
                .expect("task completes")
                .expect("seed succeeds");
            if outcome == SeedOutcome::Applied {
                applied += 1;
            }
        }
        assert_eq!(applied, 1, "exactly one caller may apply the seed");

        let found = store
            .find("product", Filter::new(), 10)
            .await
            .expect("find succeeds");
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn collection_names_lists_non_empty_collections() {
        let store = MemoryDocumentStore::new();
        store
            .insert("testimonial", json!({ "name": "A", "content": "x" }))
            .await
            .expect("insert succeeds");
        store
            .insert("product", json!({ "title": "B" }))
            .await
            .expect("insert succeeds");

        let names = store.collection_names().await.expect("names readable");
        assert_eq!(names, vec!["product", "testimonial"]);
    }
}
