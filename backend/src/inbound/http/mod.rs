//! HTTP inbound adapter exposing the REST endpoints.

pub mod checkout;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod intake;
pub mod journey;
pub mod products;
pub mod root;
pub mod state;

pub use error::ApiResult;

use actix_web::web;

/// Register every REST endpoint on the given service config.
///
/// Handlers expect [`state::HttpState`] and [`health::HealthState`] to be
/// available via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index)
        .service(root::schema)
        .service(products::list_products)
        .service(checkout::create_checkout_session)
        .service(journey::journey)
        .service(intake::enroll)
        .service(intake::contact)
        .service(content::media_list)
        .service(content::community)
        .service(diagnostics::test_database)
        .service(health::ready)
        .service(health::live);
}
