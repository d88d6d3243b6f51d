//! Request types for the shared crate
//!
//! Every request body is wrapped under a `data` key.

use serde::{Deserialize, Serialize};

/// Request body envelope
///
/// ```json
/// { "data": { "name": "Tacos", ... } }
/// ```
///
/// A body without `data` decodes to `T::default()`, so the first required
/// field check reports the problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<T> {
    #[serde(default)]
    pub data: T,
}

impl<T> RequestEnvelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}
