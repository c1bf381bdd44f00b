//! Shared test harness for repository testing
//!
//! Provides sample entities and the `repository_contract_tests!` macro.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//! use repository_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod contract_tests;

use cart_api::prelude::*;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub fn pecans() -> CartItem {
    CartItem::new("Pecans", "Standard Nuts", 2, Decimal::new(9950, 2))
}

pub fn edit_cart_item(item: &mut CartItem) {
    item.quantity += 3;
    item.description = Some("Buttery pecan halves".to_string());
}

pub fn placed_at() -> DateTime<Utc> {
    "2025-03-01T09:30:00Z".parse().expect("valid timestamp")
}

pub fn sample_order() -> Order {
    let mut line = pecans();
    line.id = 10;
    Order {
        id: String::new(),
        date: placed_at(),
        total: Decimal::new(19900, 2),
        customer_name: Some("Thandi".to_string()),
        status: Some("pending".to_string()),
        order_date: placed_at(),
        items: vec![line],
        shipping_address: None,
    }
}

pub fn edit_order(order: &mut Order) {
    order.status = Some("shipped".to_string());
    order.total += Decimal::new(50, 0);
}

pub fn sample_address() -> ShippingAddress {
    ShippingAddress {
        full_name: "Thandi Mokoena".to_string(),
        street_address: "12 Long Street".to_string(),
        city: "Cape Town".to_string(),
        state: "Western Cape".to_string(),
        zip_code: "8001".to_string(),
        phone: None,
    }
}
