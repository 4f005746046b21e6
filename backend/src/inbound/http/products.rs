//! Product catalog read endpoint.
//!
//! ```text
//! GET /products
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Product listing payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    /// Normalized product records.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub data: Vec<serde_json::Value>,
}

/// List products, seeding the default catalog when the collection is empty.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Product catalog", body = ProductListResponse),
        (status = 503, description = "Store not configured", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalog"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<ProductListResponse>> {
    let data = state.catalog.list_products().await?;
    Ok(web::Json(ProductListResponse { data }))
}
