//! Media and community event feed endpoints.
//!
//! ```text
//! GET /media
//! GET /community
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Media feed payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MediaListResponse {
    /// Normalized media records.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub data: Vec<serde_json::Value>,
}

/// Community event feed payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommunityResponse {
    /// Normalized community event records.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub events: Vec<serde_json::Value>,
}

/// List published media items. Degrades to an empty feed when no store is
/// configured.
#[utoipa::path(
    get,
    path = "/media",
    responses(
        (status = 200, description = "Media feed", body = MediaListResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "listMedia"
)]
#[get("/media")]
pub async fn media_list(state: web::Data<HttpState>) -> ApiResult<web::Json<MediaListResponse>> {
    let data = state.content.media_items().await?;
    Ok(web::Json(MediaListResponse { data }))
}

/// List announced community events. Degrades to an empty feed when no store
/// is configured.
#[utoipa::path(
    get,
    path = "/community",
    responses(
        (status = 200, description = "Community events", body = CommunityResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "listCommunityEvents"
)]
#[get("/community")]
pub async fn community(state: web::Data<HttpState>) -> ApiResult<web::Json<CommunityResponse>> {
    let events = state.content.community_events().await?;
    Ok(web::Json(CommunityResponse { events }))
}
