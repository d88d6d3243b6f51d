//! Data models
//!
//! Shared between grub-server and API clients.
//! All IDs are opaque strings produced by [`crate::util::next_id`].

pub mod dish;
pub mod order;

// Re-exports
pub use dish::*;
pub use order::*;
