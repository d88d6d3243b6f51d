//! Unified error system for the GrubDash service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code and client-facing message
//! - [`ApiResponse`] / [`ErrorResponse`]: `{data}` and `{error}` envelopes
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Routing errors
//! - 4xxx: Order errors
//! - 6xxx: Dish errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::with_message(ErrorCode::DishNotFound, "Dish does not exist: 7.");
//! assert_eq!(err.http_status(), shared::http::StatusCode::NOT_FOUND);
//!
//! let body = ErrorResponse::from(&err);
//! assert_eq!(body.error, "Dish does not exist: 7.");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult, ErrorResponse};
