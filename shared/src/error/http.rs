//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::RouteNotFound | Self::OrderNotFound | Self::DishNotFound => {
                StatusCode::NOT_FOUND
            }

            // 405 Method Not Allowed
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and illegal state transitions)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
