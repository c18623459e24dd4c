//! Uniform error responses
//!
//! Every failure leaves the API as
//! `{"errors": {"kind": ..., "message": ..., "fields": [...]}}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sharehub_domain::{FieldViolation, ShareHubError};
use thiserror::Error;

const GENERIC_SERVER_MESSAGE: &str = "Server error";

/// Every way a request can fail at the HTTP boundary
#[derive(Error, Debug)]
pub enum ApiError {
    /// Failure reported by the service layer
    #[error(transparent)]
    Domain(#[from] ShareHubError),

    /// Body could not be decoded
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Known path, unsupported method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedPayload(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status this error is sent with
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Domain(err) => status_for(err),
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(err: &ShareHubError) -> StatusCode {
    match err {
        ShareHubError::ValidationFailed(_) | ShareHubError::InvalidInput(_) => {
            StatusCode::BAD_REQUEST
        }
        ShareHubError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ShareHubError::NotFound(_) => StatusCode::NOT_FOUND,
        ShareHubError::Conflict(_) => StatusCode::CONFLICT,
        ShareHubError::Database(_) | ShareHubError::Config(_) | ShareHubError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    errors: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [FieldViolation]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::MalformedPayload(detail) => ErrorBody {
                kind: "invalid_input",
                message: format!("Malformed request body: {detail}"),
                fields: None,
            },
            ApiError::MethodNotAllowed(detail) => ErrorBody {
                kind: "method_not_allowed",
                message: format!("Method not allowed: {detail}"),
                fields: None,
            },
            ApiError::Domain(ShareHubError::ValidationFailed(violations)) => ErrorBody {
                kind: "validation_failed",
                message: "Validation failed".to_string(),
                fields: Some(violations.as_slice()),
            },
            ApiError::Domain(err) if err.is_server_error() => {
                tracing::error!(error = %err, "request failed on the server side");
                ErrorBody { kind: err.label(), message: GENERIC_SERVER_MESSAGE.into(), fields: None }
            }
            ApiError::Domain(err) => {
                ErrorBody { kind: err.label(), message: client_message(err), fields: None }
            }
        };

        (status, Json(ErrorEnvelope { errors: body })).into_response()
    }
}

fn client_message(err: &ShareHubError) -> String {
    match err {
        ShareHubError::InvalidInput(msg)
        | ShareHubError::Unauthorized(msg)
        | ShareHubError::Conflict(msg) => msg.clone(),
        ShareHubError::NotFound(what) => format!("Not found: {what}"),
        other => other.to_string(),
    }
}
