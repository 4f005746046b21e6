//! Document store adapters.
//!
//! Two implementations of the [`crate::domain::ports::DocumentStore`] port
//! live here:
//!
//! - [`DieselDocumentStore`] — PostgreSQL via the Diesel ORM with async
//!   support through `diesel-async` and `bb8` connection pooling. Records
//!   land in a single `documents` table keyed by collection name with a
//!   `JSONB` body; seed markers live in `seed_runs`. The adapter is thin: it
//!   translates between rows and domain documents and maps database errors
//!   to the port's error type. No business logic resides here.
//! - [`MemoryDocumentStore`] — a mutex-guarded in-process store with the
//!   same semantics, used by tests and for database-less development runs.

mod diesel_document_store;
mod memory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_store::DieselDocumentStore;
pub use memory::MemoryDocumentStore;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
