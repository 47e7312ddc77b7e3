//! Error type system for the mock gateway
//!
//! Every failure a caller can observe maps to one `GatewayError` variant,
//! which in turn maps to an HTTP status and a `{ "message": ... }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main error type for the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // Authentication gate
    #[error("{0}")]
    MissingCredential(String),

    #[error("{0}")]
    InvalidCredential(String),

    #[error("{0}")]
    MalformedCredential(String),

    // Login
    #[error("Invalid credentials")]
    InvalidLoginInput,

    // Request body could not be parsed
    #[error("{0}")]
    InvalidRequest(String),

    // Server-side failures
    #[error("Failed to issue session token: {0}")]
    TokenError(String),
}

impl GatewayError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingCredential(_) | GatewayError::InvalidCredential(_) => {
                StatusCode::UNAUTHORIZED
            }

            GatewayError::MalformedCredential(_)
            | GatewayError::InvalidLoginInput
            | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,

            GatewayError::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name used in log records
    pub fn error_type(&self) -> &'static str {
        match self {
            GatewayError::MissingCredential(_) => "MissingCredential",
            GatewayError::InvalidCredential(_) => "InvalidCredential",
            GatewayError::MalformedCredential(_) => "MalformedCredential",
            GatewayError::InvalidLoginInput => "InvalidLoginInput",
            GatewayError::InvalidRequest(_) => "InvalidRequest",
            GatewayError::TokenError(_) => "TokenError",
        }
    }
}

/// Error body returned to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn from_error(error: &GatewayError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error_type = self.error_type(),
                status_code = %status_code,
                "Request failed: {}",
                self
            );
        } else {
            tracing::warn!(
                error_type = self.error_type(),
                status_code = %status_code,
                "Request rejected: {}",
                self
            );
        }

        (status_code, Json(ErrorResponse::from_error(&self))).into_response()
    }
}

/// Result type alias for operations that can fail with GatewayError
pub type Result<T> = std::result::Result<T, GatewayError>;
