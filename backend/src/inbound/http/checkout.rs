//! Checkout endpoint.
//!
//! ```text
//! POST /checkout {"items":[{"id":"...","title":"...","qty":2,"price":9.99}]}
//! ```
//!
//! Stores the aggregated order and returns a mock checkout reference; no
//! real payment provider is called.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CartLine, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// One cart line as submitted by the client.
///
/// Every field is optional; construction of the domain cart line applies
/// the documented defaults and rejects out-of-bound values.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckoutItemRequest {
    /// Product identifier; stored as a soft reference.
    #[serde(default)]
    pub id: Option<String>,
    /// Product title captured for the order.
    #[serde(default)]
    pub title: Option<String>,
    /// Quantity; defaults to 1.
    #[serde(default)]
    pub qty: Option<i64>,
    /// Unit price; defaults to 0.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Checkout request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckoutRequest {
    /// Cart lines to aggregate.
    pub items: Vec<CheckoutItemRequest>,
    /// Customer email; defaults to the guest placeholder.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Payment provider tag; defaults to `stripe`.
    #[serde(default)]
    pub provider: Option<String>,
}

/// Checkout response payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    /// Mock checkout URL for the persisted order.
    #[schema(example = "/pay/mock/3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub checkout_url: String,
    /// Identifier of the persisted order.
    pub order_id: String,
    /// Echoed payment provider tag.
    pub provider: String,
    /// Integration-placeholder note.
    pub note: String,
}

/// Aggregate the cart into a persisted order and return a mock checkout
/// reference.
#[utoipa::path(
    post,
    path = "/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order stored", body = CheckoutResponse),
        (status = 422, description = "Invalid cart or email", body = Error),
        (status = 503, description = "Store not configured", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["checkout"],
    operation_id = "createCheckoutSession"
)]
#[post("/checkout")]
pub async fn create_checkout_session(
    state: web::Data<HttpState>,
    payload: web::Json<CheckoutRequest>,
) -> ApiResult<web::Json<CheckoutResponse>> {
    let CheckoutRequest {
        items,
        customer_email,
        provider,
    } = payload.into_inner();

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        lines.push(CartLine::new(item.id, item.title, item.qty, item.price)?);
    }

    let outcome = state.checkout.checkout(lines, customer_email, provider).await?;
    Ok(web::Json(CheckoutResponse {
        checkout_url: outcome.checkout_url,
        order_id: outcome.order_id,
        provider: outcome.provider,
        note: outcome.note.to_owned(),
    }))
}
