//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the primary error type for the service, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages, rendered verbatim to clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error (400)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error (400)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error (500)
    ///
    /// The detail is logged, clients only see the generic message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a route not found error for the given path
    pub fn route_not_found(path: &str) -> Self {
        Self::with_message(ErrorCode::RouteNotFound, format!("Path not found: {path}"))
    }

    /// Create a method not allowed error for the given method and path
    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::with_message(
            ErrorCode::MethodNotAllowed,
            format!("{method} not allowed for {path}"),
        )
    }

    /// Message safe to show to clients
    pub fn public_message(&self) -> &str {
        if self.code.category() == super::category::ErrorCategory::System {
            self.code.message()
        } else {
            &self.message
        }
    }
}

/// Success envelope: every response body is wrapped under `data`
///
/// ```json
/// { "data": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope
///
/// ```json
/// { "error": "Dish must include a name" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.public_message().to_string(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
