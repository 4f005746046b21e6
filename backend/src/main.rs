//! Backend entry-point: reads settings, wires the store, and serves HTTP.

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use soulful_backend::inbound::http::health::HealthState;
use soulful_backend::server::{self, Settings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::from_env();
    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, settings).await?;
    server.await
}
