//! Embedded schema migrations.
//!
//! Migrations run once at startup over a blocking wrapper around the async
//! connection, keeping the crate free of the native libpq client.

use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// SQL migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Failure while preparing the database schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be established.
    #[error("database connection for migrations failed: {message}")]
    Connection {
        /// Raw diagnostics from the driver.
        message: String,
    },
    /// Applying pending migrations failed.
    #[error("running migrations failed: {message}")]
    Migration {
        /// Raw diagnostics from the harness.
        message: String,
    },
}

/// Apply any pending migrations against `database_url`.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration fails to apply.
pub async fn run_migrations(database_url: String) -> Result<(), MigrationError> {
    tokio::task::spawn_blocking(move || {
        use diesel::Connection;

        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
            .map_err(|err| MigrationError::Connection {
                message: err.to_string(),
            })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|err| MigrationError::Migration {
                message: err.to_string(),
            })
    })
    .await
    .map_err(|err| MigrationError::Migration {
        message: err.to_string(),
    })?
}
