//! Service banner and schema explorer endpoints.
//!
//! ```text
//! GET /
//! GET /schema
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::EntityKind;

/// Banner payload for the root endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable service banner.
    #[schema(example = "Bilal Qori API running")]
    pub message: String,
}

/// Collection listing for admin tooling.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchemaResponse {
    /// Names of every collection the registry validates.
    pub collections: Vec<String>,
}

/// Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = MessageResponse)),
    tags = ["meta"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: "Bilal Qori API running".to_owned(),
    })
}

/// Schema explorer for admin tooling.
#[utoipa::path(
    get,
    path = "/schema",
    responses((status = 200, description = "Known collections", body = SchemaResponse)),
    tags = ["meta"],
    operation_id = "getSchema"
)]
#[get("/schema")]
pub async fn schema() -> web::Json<SchemaResponse> {
    let collections = EntityKind::ALL
        .iter()
        .map(|kind| kind.collection().to_owned())
        .collect();
    web::Json(SchemaResponse { collections })
}
