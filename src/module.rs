//! Module definition for the storefront backend
//!
//! Owns one cart item store and one order store for the lifetime of the
//! process and hands them to the route descriptors.

use crate::core::module::Module;
use crate::entities::cart_item::{CartItemDescriptor, CartItemStore};
use crate::entities::order::{OrderDescriptor, OrderStore};
use crate::server::entity_registry::EntityRegistry;

/// Storefront module: cart items and orders
#[derive(Clone, Default)]
pub struct StorefrontModule {
    pub cart_items: CartItemStore,
    pub orders: OrderStore,
}

impl StorefrontModule {
    /// Module backed by fresh, independent stores
    pub fn new() -> Self {
        Self::with_stores(CartItemStore::new(), OrderStore::new())
    }

    /// Module backed by stores the caller keeps handles to
    pub fn with_stores(cart_items: CartItemStore, orders: OrderStore) -> Self {
        Self { cart_items, orders }
    }
}

impl Module for StorefrontModule {
    fn name(&self) -> &str {
        "storefront"
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["cart_item", "order"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(CartItemDescriptor::new(self.cart_items.clone())));
        registry.register(Box::new(OrderDescriptor::new(self.orders.clone())));
    }
}
