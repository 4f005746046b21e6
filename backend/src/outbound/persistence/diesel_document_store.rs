//! PostgreSQL-backed document store adapter.
//!
//! Records are stored in the `documents` table keyed by collection name with
//! a `JSONB` body. The seed guard is the `seed_runs` primary key: the marker
//! insert runs `ON CONFLICT DO NOTHING` inside one transaction with the
//! record inserts, so the default-data seed is applied at most once no
//! matter how many callers race the first read.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::documents::{Document, DocumentId, Filter};
use crate::domain::ports::{DocumentStore, DocumentStoreError, SeedOutcome};

use super::models::{DocumentRow, NewDocumentRow, NewSeedRunRow};
use super::pool::{DbPool, PoolError};
use super::schema::{documents, seed_runs};

/// Diesel-backed implementation of the document store port.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to port persistence errors.
fn map_pool_error(error: PoolError) -> DocumentStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DocumentStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to port persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> DocumentStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "diesel operation failed");

    match error {
        DieselError::NotFound => DocumentStoreError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            DocumentStoreError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => DocumentStoreError::query(info.message().to_owned()),
        other => DocumentStoreError::query(other.to_string()),
    }
}

/// Clamp a caller-supplied limit into the SQL `LIMIT` domain.
fn query_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for DieselDocumentStore {
    async fn insert(&self, collection: &str, body: Value) -> Result<DocumentId, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4();
        let row = NewDocumentRow {
            id,
            collection,
            body: &body,
        };
        diesel::insert_into(documents::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(DocumentId::from_uuid(id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Filter,
        limit: usize,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // An empty filter is the empty JSONB object, which every record
        // body contains, so `@>` matches the whole collection.
        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection))
            .filter(documents::body.contains(Value::Object(filter)))
            .order(documents::seq.asc())
            .limit(query_limit(limit))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    async fn seed_if_absent(
        &self,
        seed_key: &str,
        collection: &str,
        bodies: Vec<Value>,
    ) -> Result<SeedOutcome, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let outcome = conn
            .transaction(|conn| {
                async move {
                    let new_run = NewSeedRunRow { seed_key };
                    let inserted = diesel::insert_into(seed_runs::table)
                        .values(&new_run)
                        .on_conflict(seed_runs::seed_key)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    if inserted == 0 {
                        return Ok(SeedOutcome::AlreadySeeded);
                    }

                    let rows: Vec<NewDocumentRow<'_>> = bodies
                        .iter()
                        .map(|body| NewDocumentRow {
                            id: Uuid::new_v4(),
                            collection,
                            body,
                        })
                        .collect();
                    diesel::insert_into(documents::table)
                        .values(&rows)
                        .execute(conn)
                        .await?;

                    Ok(SeedOutcome::Applied)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(outcome)
    }

    async fn collection_names(&self) -> Result<Vec<String>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and limit clamping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let mapped = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(mapped, DocumentStoreError::Connection { .. }));
        assert!(
            mapped.to_string().contains("connection refused"),
            "preserve useful diagnostics"
        );
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(mapped, DocumentStoreError::Query { .. }));
        assert!(mapped.to_string().contains("record not found"));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(200, 200)]
    fn limits_convert_losslessly(#[case] limit: usize, #[case] expected: i64) {
        assert_eq!(query_limit(limit), expected);
    }
}
