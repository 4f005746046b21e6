//! Enrollment and contact intake endpoints.
//!
//! ```text
//! POST /enroll  {"name":"...","email":"...","program":"tilawah"}
//! POST /contact {"name":"...","email":"...","message":"..."}
//! ```
//!
//! Both paths validate through the schema registry before anything is
//! persisted; a rejected submission leaves zero records behind.

use actix_web::{post, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{EntityKind, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned for stored submissions.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionResponse {
    /// Fixed `ok` marker.
    #[schema(example = "ok")]
    pub status: String,
    /// Identifier of the stored record.
    pub id: String,
}

async fn submit(state: &HttpState, kind: EntityKind, raw: Value) -> ApiResult<web::Json<SubmissionResponse>> {
    let id = state.intake.submit(kind, raw).await?;
    Ok(web::Json(SubmissionResponse {
        status: "ok".to_owned(),
        id: id.to_string(),
    }))
}

/// Store a program enrollment request.
#[utoipa::path(
    post,
    path = "/enroll",
    request_body = Value,
    responses(
        (status = 200, description = "Enrollment stored", body = SubmissionResponse),
        (status = 422, description = "Validation failure", body = Error),
        (status = 503, description = "Store not configured", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["intake"],
    operation_id = "enroll"
)]
#[post("/enroll")]
pub async fn enroll(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SubmissionResponse>> {
    submit(&state, EntityKind::Enrollment, payload.into_inner()).await
}

/// Store a contact form message.
#[utoipa::path(
    post,
    path = "/contact",
    request_body = Value,
    responses(
        (status = 200, description = "Message stored", body = SubmissionResponse),
        (status = 422, description = "Validation failure", body = Error),
        (status = 503, description = "Store not configured", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["intake"],
    operation_id = "contact"
)]
#[post("/contact")]
pub async fn contact(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<SubmissionResponse>> {
    submit(&state, EntityKind::ContactMessage, payload.into_inner()).await
}
