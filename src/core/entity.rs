//! Entity and key traits shared by every repository

use std::fmt::{Debug, Display};

/// Key of a stored entity
///
/// Every key type has one "unset" value. An entity submitted with an unset key
/// asks the store to pick a fresh one.
pub trait StoreKey: Clone + PartialEq + Debug + Display + Send + Sync + 'static {
    /// Whether this key is the zero/empty placeholder
    fn is_unset(&self) -> bool;
}

impl StoreKey for i64 {
    fn is_unset(&self) -> bool {
        *self == 0
    }
}

impl StoreKey for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

/// A record that lives in an [`IdentifiedStore`](crate::storage::IdentifiedStore)
///
/// Implementors describe how to read and assign their key, and which fields an
/// update is allowed to overwrite.
pub trait Identified: Clone + Send + Sync + 'static {
    type Key: StoreKey;

    /// Singular, human-readable resource name (e.g. "cart item")
    fn resource_name() -> &'static str;

    fn key(&self) -> &Self::Key;

    fn set_key(&mut self, key: Self::Key);

    /// Overwrite every mutable field with the values from `incoming`
    ///
    /// The key is never touched.
    fn apply_update(&mut self, incoming: Self);
}

/// Source of candidate keys for new entities
///
/// A generator only proposes keys. The store checks each candidate against
/// its current contents and asks again on a collision.
pub trait KeyGenerator<K>: Send + Sync {
    /// Propose a key, given every key currently stored
    ///
    /// Returns `None` when the key space is exhausted.
    fn propose(&self, existing: &[&K]) -> Option<K>;
}

/// Integer keys: one greater than the current maximum, or 1 when empty
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialKeys;

impl KeyGenerator<i64> for SequentialKeys {
    fn propose(&self, existing: &[&i64]) -> Option<i64> {
        match existing.iter().map(|k| **k).max() {
            Some(max) => max.max(0).checked_add(1),
            None => Some(1),
        }
    }
}
