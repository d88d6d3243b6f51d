//! Shared types for the GrubDash service
//!
//! Domain models, request/response envelopes and the error system used by
//! the server and by API clients.

pub mod error;
pub mod models;
pub mod request;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode, ErrorResponse};
pub use request::RequestEnvelope;
pub use util::next_id;
