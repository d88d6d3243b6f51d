//! Dish Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dish entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Assigned on creation, never changes
    pub id: String,
    pub name: String,
    pub description: String,
    /// Positive integer price
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Build a new dish from validated fields
    pub fn new(id: impl Into<String>, fields: DishFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

/// Validated dish fields (create and full-replacement update)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Raw create/update payload, exactly as sent under `data`
///
/// Fields are kept as JSON values so validation can report the first
/// offending field with a precise message instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishPayload {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    /// `Some(Value::Null)` for an explicit null, `None` when the key is absent
    #[serde(default, deserialize_with = "crate::util::present")]
    pub price: Option<Value>,
    #[serde(default)]
    pub image_url: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(name: &str, price: u64) -> DishFields {
        DishFields {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            image_url: "https://example.com/a.jpg".to_string(),
        }
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut dish = Dish::new("d1", fields("Soup", 4));
        dish.apply(fields("Stew", 9));
        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Stew");
        assert_eq!(dish.price, 9);
    }

    #[test]
    fn test_payload_distinguishes_null_price_from_absent() {
        let absent: DishPayload = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert_eq!(absent.price, None);

        let null: DishPayload = serde_json::from_value(json!({ "price": null })).unwrap();
        assert_eq!(null.price, Some(Value::Null));
    }

    #[test]
    fn test_dish_serializes_snake_case_image_url() {
        let json = serde_json::to_value(Dish::new("d1", fields("Soup", 4))).unwrap();
        assert_eq!(json["image_url"], "https://example.com/a.jpg");
        assert_eq!(json["price"], 4);
    }
}
