use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use service::errors::ServiceError;
use service::namespace::Namespace;

/// JSON error envelope: `{"error": ..., "details": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Self {
        Self { status, error: error.into(), details }
    }

    /// Map a service outcome to a status. `failure` is the generic message
    /// used for storage faults, e.g. "Save Failed".
    pub fn from_service(err: ServiceError, failure: &'static str) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Storage(msg) => {
                error!(error = %msg, failure, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure, Some(msg))
            }
        }
    }

    /// A body that could not be read as the expected JSON object counts as
    /// missing fields, except oversize bodies which keep their 413.
    pub fn rejected(rejection: JsonRejection, ns: Namespace) -> Self {
        let status = rejection.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::new(status, "Payload Too Large", Some(rejection.body_text()));
        }
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("{} and {} are required", ns.key_field(), ns.payload_field()),
            Some(rejection.body_text()),
        )
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: &self.error, details: self.details.as_deref() };
        (self.status, Json(body)).into_response()
    }
}
