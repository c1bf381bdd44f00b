//! Cart item entity model with validation rules

use crate::core::entity::Identified;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A product line in the cart, also used as the catalog entry type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Zero asks the store to assign the next id
    #[serde(default)]
    pub id: i64,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub size: Option<String>,

    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[serde(default)]
    pub image: Option<String>,
}

impl CartItem {
    /// A keyless item with just the required fields set
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            description: None,
            size: None,
            quantity,
            price,
            image: None,
        }
    }
}

fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("range").with_message("price must be greater than 0".into()))
    }
}

impl Identified for CartItem {
    type Key = i64;

    fn resource_name() -> &'static str {
        "cart item"
    }

    fn key(&self) -> &i64 {
        &self.id
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn apply_update(&mut self, incoming: Self) {
        self.name = incoming.name;
        self.category = incoming.category;
        self.description = incoming.description;
        self.size = incoming.size;
        self.quantity = incoming.quantity;
        self.price = incoming.price;
        self.image = incoming.image;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_payload() {
        let item: CartItem = serde_json::from_value(json!({
            "name": "Pecans",
            "category": "Standard Nuts",
            "quantity": 2,
            "price": 99.50
        }))
        .unwrap();

        assert_eq!(item.id, 0);
        assert_eq!(item.price, Decimal::new(995, 1));
        assert_eq!(item.description, None);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_serializes_price_as_number() {
        let item = CartItem::new("Pecans", "Standard Nuts", 2, Decimal::new(9950, 2));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"], json!(99.5));
        assert_eq!(value["quantity"], json!(2));
        assert_eq!(value["image"], json!(null));
    }

    #[test]
    fn test_rejects_zero_quantity_and_price() {
        let item = CartItem::new("Pecans", "Standard Nuts", 0, Decimal::ZERO);
        let errors = item.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("quantity"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_rejects_negative_price_and_blank_name() {
        let item = CartItem::new("", "Standard Nuts", 1, Decimal::NEGATIVE_ONE);
        let errors = item.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(!fields.contains_key("category"));
    }

    #[test]
    fn test_apply_update_keeps_id() {
        let mut stored = CartItem::new("Pecans", "Standard Nuts", 1, Decimal::new(9950, 2));
        stored.id = 10;
        let mut incoming = CartItem::new("Pecan Halves", "Standard Nuts", 3, Decimal::new(105, 0));
        incoming.id = 10;
        incoming.size = Some("250g".to_string());

        stored.apply_update(incoming.clone());
        assert_eq!(stored, incoming);
    }
}
