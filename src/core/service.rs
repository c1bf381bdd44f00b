//! Repository trait for keyed entity collections

use crate::core::entity::Identified;
use crate::core::error::StorageError;
use async_trait::async_trait;

/// Service trait for managing one kind of entity
///
/// Absence is part of normal control flow: lookups, updates and deletes of a
/// missing key return `None`/`false`. Errors are reserved for storage faults.
#[async_trait]
pub trait Repository<T: Identified>: Send + Sync {
    /// List every entity in insertion order
    async fn list(&self) -> Result<Vec<T>, StorageError>;

    /// Get an entity by key
    async fn get(&self, key: &T::Key) -> Result<Option<T>, StorageError>;

    /// Create an entity, or update it if its key is already stored
    async fn create(&self, entity: T) -> Result<T, StorageError>;

    /// Update an existing entity
    async fn update(&self, entity: T) -> Result<Option<T>, StorageError>;

    /// Delete an entity, reporting whether anything was removed
    async fn delete(&self, key: &T::Key) -> Result<bool, StorageError>;
}
