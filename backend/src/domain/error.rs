//! Domain-level error envelope.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and JSON payloads; nothing in the domain knows about HTTP.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails schema validation.
    InvalidRequest,
    /// The document store is not configured or cannot accept the operation.
    ServiceUnavailable,
    /// An unexpected failure occurred inside the domain or an adapter.
    InternalError,
}

/// Categorized error payload returned by domain services.
///
/// The `message` of an [`ErrorCode::InternalError`] may carry raw adapter
/// diagnostics; the HTTP adapter redacts it before it reaches a client.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "invalid field `email`: not a valid email address")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_set_the_expected_code() {
        assert_eq!(
            Error::invalid_request("bad").code(),
            ErrorCode::InvalidRequest
        );
        assert_eq!(
            Error::service_unavailable("down").code(),
            ErrorCode::ServiceUnavailable
        );
        assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
    }

    #[test]
    fn details_round_trip_through_serialization() {
        let error = Error::invalid_request("bad").with_details(json!({ "field": "email" }));
        let value = serde_json::to_value(&error).expect("error serializes");
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["details"]["field"], "email");
    }

    #[test]
    fn details_are_omitted_when_absent() {
        let value = serde_json::to_value(Error::internal("boom")).expect("error serializes");
        assert!(value.get("details").is_none());
    }
}
