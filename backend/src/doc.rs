//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and response schema. The
//! generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::checkout::{CheckoutItemRequest, CheckoutRequest, CheckoutResponse};
use crate::inbound::http::content::{CommunityResponse, MediaListResponse};
use crate::inbound::http::diagnostics::DiagnosticsResponse;
use crate::inbound::http::intake::SubmissionResponse;
use crate::inbound::http::journey::JourneyResponse;
use crate::inbound::http::products::ProductListResponse;
use crate::inbound::http::root::{MessageResponse, SchemaResponse};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bilal Qori training & commerce API",
        description = "Catalog, checkout, intake, and content feeds over a schema-validated document store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::index,
        crate::inbound::http::root::schema,
        crate::inbound::http::products::list_products,
        crate::inbound::http::checkout::create_checkout_session,
        crate::inbound::http::journey::journey,
        crate::inbound::http::intake::enroll,
        crate::inbound::http::intake::contact,
        crate::inbound::http::content::media_list,
        crate::inbound::http::content::community,
        crate::inbound::http::diagnostics::test_database,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        MessageResponse,
        SchemaResponse,
        ProductListResponse,
        CheckoutItemRequest,
        CheckoutRequest,
        CheckoutResponse,
        JourneyResponse,
        SubmissionResponse,
        MediaListResponse,
        CommunityResponse,
        DiagnosticsResponse,
    )),
    tags(
        (name = "meta", description = "Service banner, schema explorer, and diagnostics"),
        (name = "catalog", description = "Product catalog reads"),
        (name = "checkout", description = "Cart aggregation and order persistence"),
        (name = "content", description = "Read-only content feeds"),
        (name = "intake", description = "Enrollment and contact submissions"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.
    use super::*;

    #[test]
    fn openapi_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/schema",
            "/products",
            "/checkout",
            "/journey",
            "/enroll",
            "/contact",
            "/media",
            "/community",
            "/test",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "OpenAPI document should describe {path}"
            );
        }
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Error"));
        assert!(schemas.contains_key("ErrorCode"));
    }
}
