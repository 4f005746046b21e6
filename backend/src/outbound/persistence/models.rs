//! Diesel row structs for the persistence layer.
//!
//! Internal implementation details, never exposed to the domain layer.

use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use super::schema::{documents, seed_runs};
use crate::domain::documents::{Document, DocumentId};

/// Insertable document row; `seq` and `created_at` come from table defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub(super) struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub collection: &'a str,
    pub body: &'a Value,
}

/// Read projection of a document row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(super) struct DocumentRow {
    pub id: Uuid,
    pub body: Value,
}

impl DocumentRow {
    pub(super) fn into_document(self) -> Document {
        Document {
            id: DocumentId::from_uuid(self.id),
            body: self.body,
        }
    }
}

/// Insertable seed marker row; `applied_at` comes from the table default.
#[derive(Debug, Insertable)]
#[diesel(table_name = seed_runs)]
pub(super) struct NewSeedRunRow<'a> {
    pub seed_key: &'a str,
}
