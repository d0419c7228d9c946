use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use topic_engine::CatalogError;

use crate::params::ParamError;

/// Body of every error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: String,
}

impl ApiError {
    pub const INVALID_PARAMETER: &'static str = "InvalidParameter";
    pub const NOT_FOUND: &'static str = "NotFound";
    pub const INTERNAL_ERROR: &'static str = "InternalError";

    fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, Self::INVALID_PARAMETER, message)
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            Self::NOT_FOUND,
            "The requested endpoint does not exist",
        )
    }

    /// Generic 500. Detail stays in the log, never in the body.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            Self::INTERNAL_ERROR,
            "Failed to retrieve topics",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &'static str {
        self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ParamError> for ApiError {
    fn from(err: ParamError) -> Self {
        ApiError::invalid_parameter(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::error!(kind = %err.kind(), error = %err, "error processing request");
        ApiError::internal()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let payload = ErrorResponse {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
