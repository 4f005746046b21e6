//! Domain core: entities, validation, persistence port, and services.
//!
//! Everything in this module is transport agnostic. Inbound adapters map the
//! [`Error`] type to HTTP responses; outbound adapters implement the
//! [`ports::DocumentStore`] port. No module in here performs I/O of its own.

pub mod catalog;
pub mod checkout;
pub mod content;
pub mod documents;
mod email;
pub mod entities;
pub mod error;
pub mod intake;
pub mod ports;
pub mod schema;

pub use self::catalog::CatalogService;
pub use self::checkout::{CartLine, CheckoutOutcome, CheckoutService};
pub use self::content::ContentService;
pub use self::documents::{Document, DocumentId, Filter, normalize_document};
pub use self::error::{Error, ErrorCode};
pub use self::intake::IntakeService;
pub use self::schema::{EntityKind, SchemaRegistry, ValidatedRecord, ValidationError};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
