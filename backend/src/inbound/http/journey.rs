//! Journey page endpoint: program benefits plus the testimonial feed.
//!
//! ```text
//! GET /journey
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Fixed program benefits shown on the journey page.
const BENEFITS: [&str; 4] = [
    "Meningkatkan penghayatan dan makna tilawah",
    "Menguasai maqomat dengan pendekatan rasa",
    "Latihan suara dan pernafasan yang aman",
    "Pembelajaran digital yang relevan dan hangat",
];

/// Journey page payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct JourneyResponse {
    /// Program benefit bullet points.
    pub benefits: Vec<String>,
    /// Normalized testimonial records.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub testimonials: Vec<serde_json::Value>,
}

/// Return the program benefits and the most recent testimonials. The
/// testimonial feed degrades to empty when no store is configured.
#[utoipa::path(
    get,
    path = "/journey",
    responses(
        (status = 200, description = "Journey content", body = JourneyResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["content"],
    operation_id = "getJourney"
)]
#[get("/journey")]
pub async fn journey(state: web::Data<HttpState>) -> ApiResult<web::Json<JourneyResponse>> {
    let testimonials = state.content.testimonials().await?;
    Ok(web::Json(JourneyResponse {
        benefits: BENEFITS.iter().map(|benefit| (*benefit).to_owned()).collect(),
        testimonials,
    }))
}
