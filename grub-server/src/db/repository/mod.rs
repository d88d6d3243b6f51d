//! Repository Module
//!
//! Each resource owns exactly one repository. Handlers never touch the
//! underlying [`Table`](crate::db::Table) directly.

pub mod dish;
pub mod order;

// Re-exports
pub use dish::DishRepository;
pub use order::OrderRepository;
