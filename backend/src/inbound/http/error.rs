//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and
//! status codes. Internal error messages are redacted here; raw diagnostics
//! only ever reach the logs.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(err: &Error) -> Error {
    if matches!(err.code(), ErrorCode::InternalError) {
        error!(error = %err, "internal error redacted at the HTTP boundary");
        Error::internal("Internal server error")
    } else {
        err.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[actix_rt::test]
    async fn validation_errors_map_to_unprocessable_entity() {
        let err = Error::invalid_request("invalid field `email`: not a valid email address");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["code"], "invalid_request");
        assert!(
            body["message"]
                .as_str()
                .expect("message is a string")
                .contains("email")
        );
    }

    #[actix_rt::test]
    async fn internal_errors_are_redacted() {
        let err = Error::internal("connection refused to db at 10.0.0.3:5432");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(err.error_response()).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[actix_rt::test]
    async fn unavailable_errors_map_to_service_unavailable() {
        let err = Error::service_unavailable("document store is not configured");
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
