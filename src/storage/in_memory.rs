//! In-memory implementation of Repository
//!
//! [`IdentifiedStore`] keeps entities in insertion order behind a single mutex.
//! Every operation holds the lock from lookup to mutation, so key generation
//! and insertion are atomic together and concurrent creates cannot hand out
//! the same key.

use crate::core::entity::{Identified, KeyGenerator, StoreKey};
use crate::core::error::StorageError;
use crate::core::service::Repository;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// How many candidates a key generator gets before the store gives up
pub const MAX_KEY_ATTEMPTS: usize = 16;

struct StoreState<T> {
    entries: Vec<T>,
    seeded: bool,
}

impl<T: Identified> StoreState<T> {
    fn position(&self, key: &T::Key) -> Option<usize> {
        self.entries.iter().position(|e| e.key() == key)
    }

    fn fresh_key(&self, keys: &dyn KeyGenerator<T::Key>) -> Result<T::Key, StorageError> {
        let existing: Vec<&T::Key> = self.entries.iter().map(|e| e.key()).collect();

        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let Some(candidate) = keys.propose(&existing) else {
                break;
            };
            if !candidate.is_unset() && !existing.contains(&&candidate) {
                return Ok(candidate);
            }
            tracing::warn!(
                store = T::resource_name(),
                key = %candidate,
                attempt,
                "generated key collides with a stored entity, retrying"
            );
        }

        Err(StorageError::KeySpaceExhausted {
            store: T::resource_name(),
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// The single mutation path: apply `change` to the stored entity, keeping its key
    ///
    /// `index` must come from [`position`](Self::position) under the same lock.
    fn modify_at(&mut self, index: usize, change: impl FnOnce(&mut T)) -> T {
        let stored = &mut self.entries[index];
        let key = stored.key().clone();
        change(stored);
        stored.set_key(key);
        stored.clone()
    }
}

/// Generic in-memory keyed collection
///
/// Cloning the store is cheap and every clone shares the same entries.
#[derive(Clone)]
pub struct IdentifiedStore<T: Identified> {
    state: Arc<Mutex<StoreState<T>>>,
    keys: Arc<dyn KeyGenerator<T::Key>>,
    seed: Option<fn() -> Vec<T>>,
}

impl<T: Identified> IdentifiedStore<T> {
    /// Create an empty store using `keys` for generated keys
    pub fn new(keys: impl KeyGenerator<T::Key> + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState {
                entries: Vec::new(),
                seeded: false,
            })),
            keys: Arc::new(keys),
            seed: None,
        }
    }

    /// Load `seed` on first access if the store is empty at that point
    ///
    /// Seeding runs at most once per store, even if the store is later emptied.
    pub fn with_seed(mut self, seed: fn() -> Vec<T>) -> Self {
        self.seed = Some(seed);
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState<T>>, StorageError> {
        let mut state = self.state.lock().map_err(|_| StorageError::LockPoisoned {
            store: T::resource_name(),
        })?;

        if !state.seeded {
            state.seeded = true;
            match self.seed {
                Some(seed) if state.entries.is_empty() => {
                    state.entries = seed();
                    tracing::debug!(
                        store = T::resource_name(),
                        count = state.entries.len(),
                        "seeded store"
                    );
                }
                _ => {}
            }
        }

        Ok(state)
    }

    /// Snapshot of every entity in insertion order
    pub fn list_all(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.lock()?.entries.clone())
    }

    pub fn get_by_key(&self, key: &T::Key) -> Result<Option<T>, StorageError> {
        let state = self.lock()?;
        Ok(state.position(key).map(|i| state.entries[i].clone()))
    }

    /// Create-or-update
    ///
    /// - unset key: a fresh key is generated and the entity inserted
    /// - key already stored: the stored entity is updated in place, no duplicate
    /// - any other key: the entity is inserted with the caller's key
    pub fn create_or_update(&self, mut entity: T) -> Result<T, StorageError> {
        let mut state = self.lock()?;

        if entity.key().is_unset() {
            let key = state.fresh_key(self.keys.as_ref())?;
            tracing::debug!(store = T::resource_name(), key = %key, "assigned generated key");
            entity.set_key(key);
        } else if let Some(index) = state.position(entity.key()) {
            tracing::debug!(
                store = T::resource_name(),
                key = %entity.key(),
                "key already stored, create falls back to update"
            );
            return Ok(state.modify_at(index, |stored| stored.apply_update(entity)));
        }

        state.entries.push(entity.clone());
        Ok(entity)
    }

    /// Overwrite the mutable fields of the stored entity with `entity`'s
    pub fn update(&self, entity: T) -> Result<Option<T>, StorageError> {
        let key = entity.key().clone();
        self.modify(&key, |stored| stored.apply_update(entity))
    }

    /// Apply `change` to the entity stored under `key`
    ///
    /// This is the path every in-place mutation goes through. The key is
    /// restored after `change` runs, so it can never be altered here.
    pub fn modify<F>(&self, key: &T::Key, change: F) -> Result<Option<T>, StorageError>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.lock()?;
        match state.position(key) {
            Some(index) => Ok(Some(state.modify_at(index, change))),
            None => Ok(None),
        }
    }

    pub fn delete(&self, key: &T::Key) -> Result<bool, StorageError> {
        let mut state = self.lock()?;
        match state.position(key) {
            Some(index) => {
                state.entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Key the next keyless create would receive, given the current contents
    pub fn next_key(&self) -> Result<T::Key, StorageError> {
        self.lock()?.fresh_key(self.keys.as_ref())
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.lock()?.entries.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl<T: Identified> Repository<T> for IdentifiedStore<T> {
    async fn list(&self) -> Result<Vec<T>, StorageError> {
        self.list_all()
    }

    async fn get(&self, key: &T::Key) -> Result<Option<T>, StorageError> {
        self.get_by_key(key)
    }

    async fn create(&self, entity: T) -> Result<T, StorageError> {
        self.create_or_update(entity)
    }

    async fn update(&self, entity: T) -> Result<Option<T>, StorageError> {
        IdentifiedStore::update(self, entity)
    }

    async fn delete(&self, key: &T::Key) -> Result<bool, StorageError> {
        IdentifiedStore::delete(self, key)
    }
}
