//! Store documents and the read-boundary identifier normalizer.

use serde_json::{Map, Value};
use uuid::Uuid;

/// Store-assigned document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing identifier value.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying UUID value.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record retrieved from the document store: the store identifier plus the
/// persisted body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Persisted record body.
    pub body: Value,
}

/// Equality filter over record fields; an empty filter matches everything.
pub type Filter = Map<String, Value>;

/// Name of the internal identifier field some stores keep inside the body.
const INTERNAL_ID_FIELD: &str = "_id";

/// Present a document for the wire: expose the identifier as a string field
/// named `id` and strip any internal identifier representation.
///
/// Applied exactly once per record by every read endpoint — never doubled,
/// never skipped — so the wire contract is independent of the store's
/// internal identifier type. A non-object body is wrapped so the identifier
/// is still exposed.
pub fn normalize_document(document: Document) -> Value {
    let Document { id, body } = document;
    let mut fields = match body {
        Value::Object(fields) => fields,
        other => {
            let mut fields = Map::new();
            fields.insert("value".to_owned(), other);
            fields
        }
    };
    fields.remove(INTERNAL_ID_FIELD);
    fields.insert("id".to_owned(), Value::String(id.to_string()));
    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::json;

    fn document(body: Value) -> Document {
        Document {
            id: DocumentId::generate(),
            body,
        }
    }

    #[test]
    fn exposes_identifier_as_string_field() {
        let doc = document(json!({ "title": "Murottal" }));
        let id = doc.id.to_string();
        let normalized = normalize_document(doc);
        assert_eq!(normalized["id"], json!(id));
        assert_eq!(normalized["title"], json!("Murottal"));
    }

    #[test]
    fn strips_internal_identifier_field() {
        let normalized = normalize_document(document(json!({ "_id": "raw-oid", "title": "x" })));
        assert!(normalized.get("_id").is_none());
        assert!(normalized["id"].is_string());
    }

    #[test]
    fn wraps_non_object_bodies() {
        let normalized = normalize_document(document(json!("bare")));
        assert_eq!(normalized["value"], json!("bare"));
        assert!(normalized["id"].is_string());
    }
}
