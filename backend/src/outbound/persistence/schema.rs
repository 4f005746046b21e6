//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Generic record storage: one row per persisted record, indexed by the
    /// owning collection name.
    documents (id) {
        /// Store-assigned identifier (UUID v4).
        id -> Uuid,
        /// Name of the collection the record belongs to.
        collection -> Varchar,
        /// Validated record body.
        body -> Jsonb,
        /// Monotonic insertion counter used to preserve insertion order.
        seq -> Int8,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per applied seed; the primary key makes seeding idempotent.
    seed_runs (seed_key) {
        /// Seed marker name.
        seed_key -> Varchar,
        /// When the seed was applied.
        applied_at -> Timestamptz,
    }
}
