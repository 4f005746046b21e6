//! Schema registry: one validated record shape per entity kind.
//!
//! Every write path validates raw input here before persistence; there is no
//! code path that stores an unvalidated record. Validation is pure — the
//! registry never touches the document store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::{
    CommunityEvent, ContactMessage, Enrollment, MediaItem, Order, Product, Testimonial, User,
};

/// Entity kinds understood by the registry.
///
/// Each kind is persisted in the collection named by
/// [`EntityKind::collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Registered platform user.
    User,
    /// Catalog product.
    Product,
    /// Checkout order.
    Order,
    /// Program enrollment request.
    Enrollment,
    /// Student testimonial.
    Testimonial,
    /// Published media item.
    MediaItem,
    /// Community event announcement.
    CommunityEvent,
    /// Contact form submission.
    ContactMessage,
}

impl EntityKind {
    /// Every entity kind, in the order reported by the schema endpoint.
    pub const ALL: [Self; 8] = [
        Self::User,
        Self::Product,
        Self::Order,
        Self::Enrollment,
        Self::Testimonial,
        Self::MediaItem,
        Self::CommunityEvent,
        Self::ContactMessage,
    ];

    /// Name of the collection records of this kind are persisted in.
    pub fn collection(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Product => "product",
            Self::Order => "order",
            Self::Enrollment => "enrollment",
            Self::Testimonial => "testimonial",
            Self::MediaItem => "mediaitem",
            Self::CommunityEvent => "communityevent",
            Self::ContactMessage => "contactmessage",
        }
    }
}

/// Validation failure naming the offending field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    field: String,
    reason: String,
}

impl ValidationError {
    /// Create a validation error for the given field.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field the failure refers to; `payload` when no single field applies.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Human-readable reason for the failure.
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }

    fn from_deserialize(err: &serde_json::Error) -> Self {
        let reason = err.to_string();
        let field = backticked_field(&reason).unwrap_or_else(|| "payload".to_owned());
        Self::new(field, reason)
    }
}

/// Pull the field name out of serde messages such as "missing field 'title'"
/// (serde quotes the name with backticks).
fn backticked_field(message: &str) -> Option<String> {
    let (_, rest) = message.split_once('`')?;
    let (field, _) = rest.split_once('`')?;
    if field.is_empty() {
        None
    } else {
        Some(field.to_owned())
    }
}

impl From<ValidationError> for crate::domain::error::Error {
    fn from(err: ValidationError) -> Self {
        let details = serde_json::json!({ "field": err.field() });
        Self::invalid_request(err.to_string()).with_details(details)
    }
}

/// A record that passed validation for its entity kind.
///
/// The body is canonical: defaults are applied and field names match the
/// persisted layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    kind: EntityKind,
    body: Value,
}

impl ValidatedRecord {
    /// Entity kind the record was validated as.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Canonical record body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the record, yielding the canonical body.
    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Registry of per-entity validation rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Create a registry.
    pub fn new() -> Self {
        Self
    }

    /// Validate `raw` as a record of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a required field is missing, a type
    /// or format constraint is violated, or a numeric bound is out of range.
    pub fn validate(&self, kind: EntityKind, raw: Value) -> Result<ValidatedRecord, ValidationError> {
        let body = match kind {
            EntityKind::User => canonicalize(raw, User::validate)?,
            EntityKind::Product => canonicalize(raw, Product::validate)?,
            EntityKind::Order => canonicalize(raw, Order::validate)?,
            EntityKind::Enrollment => canonicalize(raw, Enrollment::validate)?,
            EntityKind::Testimonial => canonicalize(raw, Testimonial::validate)?,
            EntityKind::MediaItem => canonicalize(raw, MediaItem::validate)?,
            EntityKind::CommunityEvent => canonicalize(raw, CommunityEvent::validate)?,
            EntityKind::ContactMessage => canonicalize(raw, ContactMessage::validate)?,
        };
        Ok(ValidatedRecord { kind, body })
    }
}

/// Deserialize, run entity rules, and re-serialize the canonical body.
fn canonicalize<T>(
    raw: Value,
    check: impl FnOnce(&T) -> Result<(), ValidationError>,
) -> Result<Value, ValidationError>
where
    T: DeserializeOwned + Serialize,
{
    let entity: T =
        serde_json::from_value(raw).map_err(|err| ValidationError::from_deserialize(&err))?;
    check(&entity)?;
    serde_json::to_value(&entity).map_err(|err| ValidationError::new("payload", err.to_string()))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn product_defaults_are_applied() {
        let record = registry()
            .validate(
                EntityKind::Product,
                json!({ "title": "Tajwid primer", "price": 5.0, "category": "ebook" }),
            )
            .expect("minimal product validates");
        assert_eq!(record.kind(), EntityKind::Product);
        assert_eq!(record.body()["rating"], json!(4.9));
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let error = registry()
            .validate(EntityKind::Product, json!({ "price": 5.0, "category": "ebook" }))
            .expect_err("missing title must fail");
        assert_eq!(error.field(), "title");
    }

    #[rstest]
    #[case(-0.5)]
    #[case(-100.0)]
    fn product_price_bound_is_enforced(#[case] price: f64) {
        let error = registry()
            .validate(
                EntityKind::Product,
                json!({ "title": "Tajwid primer", "price": price, "category": "ebook" }),
            )
            .expect_err("price bound must fail");
        assert_eq!(error.field(), "price");
    }

    #[test]
    fn product_rating_above_five_is_rejected() {
        let error = registry()
            .validate(
                EntityKind::Product,
                json!({ "title": "T", "price": 1.0, "category": "ebook", "rating": 5.1 }),
            )
            .expect_err("rating bound must fail");
        assert_eq!(error.field(), "rating");
    }

    #[test]
    fn enrollment_with_malformed_email_is_rejected() {
        let error = registry()
            .validate(
                EntityKind::Enrollment,
                json!({ "name": "Aisha", "email": "not-an-email", "program": "tilawah" }),
            )
            .expect_err("malformed email must fail");
        assert_eq!(error.field(), "email");
    }

    #[test]
    fn testimonial_defaults_platform_and_rating() {
        let record = registry()
            .validate(
                EntityKind::Testimonial,
                json!({ "name": "Umar", "content": "Sangat membantu" }),
            )
            .expect("minimal testimonial validates");
        assert_eq!(record.body()["platform"], json!("student"));
        assert_eq!(record.body()["rating"], json!(5));
    }

    #[test]
    fn testimonial_rating_zero_is_rejected() {
        let error = registry()
            .validate(
                EntityKind::Testimonial,
                json!({ "name": "Umar", "content": "ok", "rating": 0 }),
            )
            .expect_err("rating below one must fail");
        assert_eq!(error.field(), "rating");
    }

    #[test]
    fn order_total_must_match_item_subtotals() {
        let error = registry()
            .validate(
                EntityKind::Order,
                json!({
                    "user_email": "guest@example.com",
                    "items": [
                        { "product_id": "p1", "title": "A", "qty": 2, "price": 9.99 }
                    ],
                    "total": 10.0
                }),
            )
            .expect_err("inconsistent total must fail");
        assert_eq!(error.field(), "total");
    }

    #[test]
    fn order_with_derived_total_validates() {
        let record = registry()
            .validate(
                EntityKind::Order,
                json!({
                    "user_email": "guest@example.com",
                    "items": [
                        { "product_id": "p1", "title": "A", "qty": 2, "price": 9.99 },
                        { "product_id": "p2", "title": "B", "qty": 1, "price": 14.9 }
                    ],
                    "total": 34.88
                }),
            )
            .expect("consistent order validates");
        assert_eq!(record.body()["payment_status"], json!("pending"));
    }

    #[test]
    fn order_item_quantity_below_one_is_rejected() {
        let error = registry()
            .validate(
                EntityKind::Order,
                json!({
                    "user_email": "guest@example.com",
                    "items": [{ "product_id": "p1", "title": "A", "qty": 0, "price": 1.0 }],
                    "total": 0.0
                }),
            )
            .expect_err("zero quantity must fail");
        assert_eq!(error.field(), "qty");
    }

    #[test]
    fn collections_cover_every_entity_kind() {
        let names: Vec<&str> = EntityKind::ALL.iter().map(|kind| kind.collection()).collect();
        assert_eq!(
            names,
            vec![
                "user",
                "product",
                "order",
                "enrollment",
                "testimonial",
                "mediaitem",
                "communityevent",
                "contactmessage"
            ]
        );
    }
}
