//! Order Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// `Delivered` is terminal: a delivered order can no longer be changed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// No further mutation is allowed once reached
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Only pending orders may be deleted
    pub const fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown order status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Order line item
///
/// Dish-shaped entry; only `quantity` is interpreted, every other key the
/// client sent is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl LineItem {
    pub fn new(quantity: u64, details: Map<String, Value>) -> Self {
        Self { quantity, details }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Assigned on creation, never changes
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

impl Order {
    /// Build a new order; a missing status starts the order as pending
    pub fn new(id: impl Into<String>, fields: OrderFields) -> Self {
        Self {
            id: id.into(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or_default(),
            dishes: fields.dishes,
        }
    }

    /// Full replacement of the mutable fields
    pub fn apply(&mut self, fields: OrderFields, status: OrderStatus) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.status = status;
        self.dishes = fields.dishes;
    }
}

/// Validated order fields
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    /// `None` when the payload carried no (or an empty) status
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

/// Raw create/update payload, exactly as sent under `data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub deliver_to: Option<Value>,
    #[serde(default)]
    pub mobile_number: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub dishes: Option<Value>,
}
