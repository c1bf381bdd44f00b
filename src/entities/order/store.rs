//! Order store implementation

use super::model::{Order, OrderIdTokens, ShippingAddress};
use crate::core::error::StorageError;
use crate::core::service::Repository;
use crate::storage::IdentifiedStore;
use async_trait::async_trait;

/// In-memory store for orders
#[derive(Clone)]
pub struct OrderStore {
    inner: IdentifiedStore<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            inner: IdentifiedStore::new(OrderIdTokens),
        }
    }

    /// Replace only the shipping address of an existing order
    ///
    /// Goes through the same locked mutation path as a full update; items,
    /// total and status are left untouched.
    pub fn patch_shipping_address(
        &self,
        id: &str,
        address: ShippingAddress,
    ) -> Result<Option<Order>, StorageError> {
        let patched = self.inner.modify(&id.to_string(), |order| {
            order.shipping_address = Some(address);
        })?;

        if patched.is_some() {
            tracing::debug!(order_id = id, "shipping address replaced");
        }
        Ok(patched)
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Order> for OrderStore {
    async fn list(&self) -> Result<Vec<Order>, StorageError> {
        self.inner.list_all()
    }

    async fn get(&self, id: &String) -> Result<Option<Order>, StorageError> {
        self.inner.get_by_key(id)
    }

    async fn create(&self, order: Order) -> Result<Order, StorageError> {
        self.inner.create_or_update(order)
    }

    async fn update(&self, order: Order) -> Result<Option<Order>, StorageError> {
        self.inner.update(order)
    }

    async fn delete(&self, id: &String) -> Result<bool, StorageError> {
        self.inner.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::cart_item::CartItem;
    use crate::entities::order::model::ORDER_ID_PREFIX;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;

    fn placed_at() -> DateTime<Utc> {
        "2025-03-01T09:30:00Z".parse().unwrap()
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            date: placed_at(),
            total: Decimal::new(26500, 2),
            customer_name: Some("Thandi".to_string()),
            status: Some("pending".to_string()),
            order_date: placed_at(),
            items: vec![
                CartItem::new("Almonds Blenched", "Standard Nuts", 1, Decimal::new(150, 0)),
                CartItem::new("Pecans", "Standard Nuts", 1, Decimal::new(115, 0)),
            ],
            shipping_address: None,
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Thandi Mokoena".to_string(),
            street_address: "12 Long Street".to_string(),
            city: "Cape Town".to_string(),
            state: "Western Cape".to_string(),
            zip_code: "8001".to_string(),
            phone: Some("+27 21 555 0100".to_string()),
        }
    }

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = OrderStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_generates_order_id() {
        let store = OrderStore::new();
        let created = store.create(order("")).await.unwrap();

        assert!(created.id.starts_with(ORDER_ID_PREFIX));
        assert_eq!(created.id.len(), 12);
        assert_eq!(store.get(&created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_keeps_client_id() {
        let store = OrderStore::new();
        let created = store.create(order("ORD-CAFE0001")).await.unwrap();
        assert_eq!(created.id, "ORD-CAFE0001");
    }

    #[tokio::test]
    async fn test_patch_missing_order_returns_none() {
        let store = OrderStore::new();
        store.create(order("")).await.unwrap();

        let patched = store
            .patch_shipping_address("ORD-ABC12345", address())
            .unwrap();
        assert_eq!(patched, None);
    }

    #[tokio::test]
    async fn test_patch_changes_only_address() {
        let store = OrderStore::new();
        let created = store.create(order("")).await.unwrap();

        let patched = store
            .patch_shipping_address(&created.id, address())
            .unwrap()
            .unwrap();

        assert_eq!(patched.shipping_address, Some(address()));
        assert_eq!(patched.items, created.items);
        assert_eq!(patched.total, created.total);
        assert_eq!(patched.status, created.status);
        assert_eq!(store.get(&created.id).await.unwrap(), Some(patched));
    }

    #[tokio::test]
    async fn test_full_update_keeps_patched_address() {
        let store = OrderStore::new();
        let created = store.create(order("")).await.unwrap();
        store
            .patch_shipping_address(&created.id, address())
            .unwrap();

        let mut incoming = created.clone();
        incoming.status = Some("shipped".to_string());
        incoming.shipping_address = None;
        let updated = store.update(incoming).await.unwrap().unwrap();

        assert_eq!(updated.status.as_deref(), Some("shipped"));
        assert_eq!(updated.shipping_address, Some(address()));
    }
}
