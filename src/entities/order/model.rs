//! Order entity model with validation rules

use crate::core::entity::{Identified, KeyGenerator};
use crate::entities::cart_item::CartItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Prefix of every generated order id
pub const ORDER_ID_PREFIX: &str = "ORD-";

/// Where an order is shipped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[validate(length(min = 1, message = "fullName is required"))]
    pub full_name: String,

    #[validate(length(min = 1, message = "streetAddress is required"))]
    pub street_address: String,

    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "zipCode is required"))]
    pub zip_code: String,

    #[serde(default)]
    pub phone: Option<String>,
}

/// A placed order with a snapshot of its cart items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Empty asks the store to generate an `ORD-XXXXXXXX` id
    #[serde(default)]
    pub id: String,

    /// When the order was first recorded; kept as-is by updates
    pub date: DateTime<Utc>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    #[serde(default)]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    pub order_date: DateTime<Utc>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<CartItem>,

    #[serde(default)]
    #[validate(nested)]
    pub shipping_address: Option<ShippingAddress>,
}

impl Identified for Order {
    type Key = String;

    fn resource_name() -> &'static str {
        "order"
    }

    fn key(&self) -> &String {
        &self.id
    }

    fn set_key(&mut self, key: String) {
        self.id = key;
    }

    /// Full updates leave `date` and `shipping_address` alone; the address
    /// only changes through the shipping-address patch.
    fn apply_update(&mut self, incoming: Self) {
        self.customer_name = incoming.customer_name;
        self.items = incoming.items;
        self.total = incoming.total;
        self.order_date = incoming.order_date;
        self.status = incoming.status;
    }
}

/// Random `ORD-` + 8 uppercase hex character order ids
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderIdTokens;

impl OrderIdTokens {
    pub fn token() -> String {
        let hex: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect();
        format!("{}{}", ORDER_ID_PREFIX, hex.to_uppercase())
    }
}

impl KeyGenerator<String> for OrderIdTokens {
    fn propose(&self, _existing: &[&String]) -> Option<String> {
        Some(Self::token())
    }
}
