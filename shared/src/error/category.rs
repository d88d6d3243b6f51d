//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Routing errors
/// - 4xxx: Order errors
/// - 6xxx: Dish errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Routing errors (1xxx)
    Routing,
    /// Order errors (4xxx)
    Order,
    /// Dish errors (6xxx)
    Dish,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Routing,
            4000..5000 => Self::Order,
            6000..7000 => Self::Dish,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::MethodNotAllowed.category(), ErrorCategory::Routing);
        assert_eq!(ErrorCode::OrderNotPending.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::DishNotFound.category(), ErrorCategory::Dish);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }
}
