//! Cart item store implementation

use super::catalog::seed_catalog;
use super::model::CartItem;
use crate::core::entity::SequentialKeys;
use crate::core::error::StorageError;
use crate::core::service::Repository;
use crate::storage::IdentifiedStore;
use async_trait::async_trait;

/// In-memory store for cart items, seeded with the catalog on first access
#[derive(Clone)]
pub struct CartItemStore {
    inner: IdentifiedStore<CartItem>,
}

impl CartItemStore {
    pub fn new() -> Self {
        Self {
            inner: IdentifiedStore::new(SequentialKeys).with_seed(seed_catalog),
        }
    }

    /// Id the next keyless create would receive
    pub fn next_id(&self) -> Result<i64, StorageError> {
        self.inner.next_key()
    }
}

impl Default for CartItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<CartItem> for CartItemStore {
    async fn list(&self) -> Result<Vec<CartItem>, StorageError> {
        self.inner.list_all()
    }

    async fn get(&self, id: &i64) -> Result<Option<CartItem>, StorageError> {
        self.inner.get_by_key(id)
    }

    async fn create(&self, item: CartItem) -> Result<CartItem, StorageError> {
        self.inner.create_or_update(item)
    }

    async fn update(&self, item: CartItem) -> Result<Option<CartItem>, StorageError> {
        self.inner.update(item)
    }

    async fn delete(&self, id: &i64) -> Result<bool, StorageError> {
        self.inner.delete(id)
    }
}
