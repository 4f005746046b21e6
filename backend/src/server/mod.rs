//! Server construction and dependency wiring.

mod settings;

pub use settings::{DEFAULT_PORT, Settings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{error, warn};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::ApiDoc;
use crate::inbound::http;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DbPool, DieselDocumentStore, PoolConfig, run_migrations};

/// Build the Actix application from prepared state.
///
/// Exposed so integration tests can run the full HTTP surface against an
/// in-memory store.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Build the HTTP state for the configured environment.
///
/// With `DATABASE_URL` set, migrations are attempted and a pooled
/// PostgreSQL store is wired; migration or pool failures are logged and the
/// pool connects lazily, so an unreachable database surfaces per-request as
/// a persistence error rather than preventing startup. Without
/// `DATABASE_URL`, the unconfigured store serves degraded reads.
pub async fn build_http_state(settings: &Settings) -> web::Data<HttpState> {
    let Some(url) = settings.database_url.clone() else {
        warn!("DATABASE_URL is not set; content reads degrade to empty and writes fail");
        return web::Data::new(HttpState::unconfigured());
    };

    if let Err(err) = run_migrations(url.clone()).await {
        error!(error = %err, "schema migrations failed; continuing with lazy connections");
    }

    match DbPool::new(PoolConfig::new(url)).await {
        Ok(pool) => web::Data::new(HttpState::new(Arc::new(DieselDocumentStore::new(pool)))),
        Err(err) => {
            error!(error = %err, "connection pool construction failed; serving degraded");
            web::Data::new(HttpState::unconfigured())
        }
    }
}

/// Construct an Actix HTTP server using the provided health state and
/// settings.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: Settings,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&settings).await;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(("0.0.0.0", settings.port))?
    .run();

    health_state.mark_ready();
    Ok(server)
}
