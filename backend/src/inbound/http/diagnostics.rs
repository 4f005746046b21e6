//! Store connectivity diagnostics endpoint.
//!
//! ```text
//! GET /test
//! ```
//!
//! Reports configuration presence independent of actual connectivity:
//! `database_url` and `database_name` reflect the environment only, while
//! `connection_status` reflects a live probe against the store.

use actix_web::{get, web};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Number of collection names included in the diagnostics payload.
const COLLECTION_PREVIEW_LIMIT: usize = 10;

/// Diagnostics payload describing store connectivity and configuration.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    /// Process status; always `running` when the endpoint answers.
    #[schema(example = "running")]
    pub backend: String,
    /// Store status: `not configured`, `connected`, or `error`.
    pub database: String,
    /// `set` when `DATABASE_URL` is present in the environment.
    pub database_url: String,
    /// `set` when `DATABASE_NAME` is present in the environment.
    pub database_name: String,
    /// Live probe result: `connected` or `not connected`.
    pub connection_status: String,
    /// Up to ten non-empty collection names.
    pub collections: Vec<String>,
}

fn env_presence(key: &str) -> String {
    if std::env::var(key).is_ok() {
        "set".to_owned()
    } else {
        "not set".to_owned()
    }
}

/// Probe the store and report configuration presence.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Diagnostics", body = DiagnosticsResponse)),
    tags = ["meta"],
    operation_id = "testDatabase"
)]
#[get("/test")]
pub async fn test_database(state: web::Data<HttpState>) -> web::Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "running".to_owned(),
        database: "not configured".to_owned(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "not connected".to_owned(),
        collections: Vec::new(),
    };

    if state.database_configured() {
        match state.store.collection_names().await {
            Ok(names) => {
                response.database = "connected".to_owned();
                response.connection_status = "connected".to_owned();
                response.collections = names.into_iter().take(COLLECTION_PREVIEW_LIMIT).collect();
            }
            Err(err) => {
                // Diagnostics must not fail; the probe result is the answer.
                warn!(error = %err, "diagnostics store probe failed");
                response.database = "error".to_owned();
            }
        }
    }

    web::Json(response)
}
