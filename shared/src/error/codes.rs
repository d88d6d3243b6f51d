//! Unified error codes for the GrubDash service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Routing errors
//! - 4xxx: Order errors
//! - 6xxx: Dish errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request (malformed body, wrong JSON type)
    InvalidRequest = 5,

    // ==================== 1xxx: Routing ====================
    /// No route matches the request path
    RouteNotFound = 1001,
    /// Route exists but does not accept the request method
    MethodNotAllowed = 1002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Payload id differs from the route id
    OrderIdMismatch = 4002,
    /// Status missing or not one of the recognized values
    OrderInvalidStatus = 4003,
    /// Order is delivered and can no longer change
    OrderAlreadyDelivered = 4004,
    /// Order is not pending and cannot be deleted
    OrderNotPending = 4005,

    // ==================== 6xxx: Dish ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Payload id differs from the route id
    DishIdMismatch = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::RouteNotFound => "Path not found",
            ErrorCode::MethodNotAllowed => "Method not allowed",

            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderIdMismatch => "Order id does not match route id",
            ErrorCode::OrderInvalidStatus => {
                "Order must have a status of pending, preparing, out-for-delivery, delivered"
            }
            ErrorCode::OrderAlreadyDelivered => "A delivered order cannot be changed",
            ErrorCode::OrderNotPending => "An order cannot be deleted unless it is pending",

            ErrorCode::DishNotFound => "Dish does not exist",
            ErrorCode::DishIdMismatch => "Dish id does not match route id",

            ErrorCode::InternalError => "Something went wrong!",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to any [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            2 => ErrorCode::ValidationFailed,
            5 => ErrorCode::InvalidRequest,
            1001 => ErrorCode::RouteNotFound,
            1002 => ErrorCode::MethodNotAllowed,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderIdMismatch,
            4003 => ErrorCode::OrderInvalidStatus,
            4004 => ErrorCode::OrderAlreadyDelivered,
            4005 => ErrorCode::OrderNotPending,
            6001 => ErrorCode::DishNotFound,
            6002 => ErrorCode::DishIdMismatch,
            9001 => ErrorCode::InternalError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::OrderAlreadyDelivered,
            ErrorCode::DishIdMismatch,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_display_is_padded() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_status_message_lists_all_statuses() {
        assert_eq!(
            ErrorCode::OrderInvalidStatus.message(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }
}
