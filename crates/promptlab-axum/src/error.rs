//! Axum-specific error types and mappings.
//!
//! Maps core run, store and catalog errors to HTTP status codes and a
//! single JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use promptlab_core::{CatalogError, RunError, StoreError};
use promptlab_store::TemplateError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server is missing required configuration (e.g. the API key).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream provider failed.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error type discriminant for client-side handling
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    error_type: Option<&'static str>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, error_type) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            Self::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                Some("CONFIGURATION"),
            ),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg, None),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        }

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            error_type,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RunError> for HttpError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Configuration(msg) => Self::Configuration(msg),
            RunError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CatalogError> for HttpError {
    fn from(err: CatalogError) -> Self {
        Self::BadGateway(err.to_string())
    }
}

impl From<TemplateError> for HttpError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
