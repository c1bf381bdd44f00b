//! Entities module - contains all storefront entities

pub mod cart_item;
pub mod order;

// Re-export models for convenience
pub use cart_item::{CartItem, CartItemStore};
pub use order::{Order, OrderStore, ShippingAddress};
