//! Macro-generated test suite for `Repository<T>` contract validation.
//!
//! # Generated Tests
//!
//! - `test_create_unset_key_gets_fresh_key`: generated key is new and non-empty
//! - `test_create_then_get`: stored entity equals the returned one
//! - `test_create_existing_key_equals_update`: upsert matches a plain update
//! - `test_absent_key_operations_change_nothing`: get/update/delete on a missing key
//! - `test_delete_removes_exactly_one`: list shrinks by one, then not at all
//! - `test_update_keeps_key`: update returns the entity under the same key
//! - `test_concurrent_creates_get_unique_keys`: parallel creates from spawned tasks

/// Generate a full `Repository<$entity>` conformance test suite.
///
/// - `$factory` builds a fresh repository (re-evaluated per test, must be `Clone`)
/// - `$sample` builds an entity with an unset key
/// - `$edit` changes at least one mutable field of an entity
/// - `$absent_key` is a key the repository never holds
#[macro_export]
macro_rules! repository_contract_tests {
    ($entity:ty, $factory:expr, $sample:expr, $edit:expr, $absent_key:expr) => {
        mod repository_contract_tests {
            use super::*;
            use cart_api::core::entity::{Identified, StoreKey};
            use cart_api::core::service::Repository;
            use std::sync::Arc;

            fn sample() -> $entity {
                ($sample)()
            }

            fn edited(mut entity: $entity) -> $entity {
                ($edit)(&mut entity);
                entity
            }

            #[tokio::test]
            async fn test_create_unset_key_gets_fresh_key() {
                let repo = $factory;
                let before = repo.list().await.unwrap();

                let created = repo.create(sample()).await.unwrap();

                assert!(!created.key().is_unset());
                assert!(
                    !before.iter().any(|e| e.key() == created.key()),
                    "generated key {} was already in use",
                    created.key()
                );
                assert_eq!(repo.list().await.unwrap().len(), before.len() + 1);
            }

            #[tokio::test]
            async fn test_create_then_get() {
                let repo = $factory;
                let created = repo.create(sample()).await.unwrap();

                let fetched = repo.get(created.key()).await.unwrap();
                assert_eq!(fetched, Some(created));
            }

            #[tokio::test]
            async fn test_create_existing_key_equals_update() {
                let via_create = $factory;
                let via_update = $factory;

                let seeded_a = via_create.create(sample()).await.unwrap();
                let mut seeded_b = sample();
                seeded_b.set_key(seeded_a.key().clone());
                via_update.create(seeded_b).await.unwrap();

                let change = edited(seeded_a.clone());
                let created = via_create.create(change.clone()).await.unwrap();
                let updated = via_update.update(change).await.unwrap();

                assert_eq!(Some(created), updated);
                assert_eq!(
                    via_create.list().await.unwrap(),
                    via_update.list().await.unwrap()
                );
            }

            #[tokio::test]
            async fn test_absent_key_operations_change_nothing() {
                let repo = $factory;
                repo.create(sample()).await.unwrap();
                let before = repo.list().await.unwrap();
                let absent = $absent_key;

                let mut ghost = sample();
                ghost.set_key(absent.clone());

                assert_eq!(repo.get(&absent).await.unwrap(), None);
                assert_eq!(repo.update(ghost).await.unwrap(), None);
                assert!(!repo.delete(&absent).await.unwrap());
                assert_eq!(repo.list().await.unwrap(), before);
            }

            #[tokio::test]
            async fn test_delete_removes_exactly_one() {
                let repo = $factory;
                let created = repo.create(sample()).await.unwrap();
                let before = repo.list().await.unwrap().len();

                assert!(repo.delete(created.key()).await.unwrap());
                assert_eq!(repo.list().await.unwrap().len(), before - 1);
                assert_eq!(repo.get(created.key()).await.unwrap(), None);

                assert!(!repo.delete(created.key()).await.unwrap());
                assert_eq!(repo.list().await.unwrap().len(), before - 1);
            }

            #[tokio::test]
            async fn test_update_keeps_key() {
                let repo = $factory;
                let created = repo.create(sample()).await.unwrap();

                let updated = repo
                    .update(edited(created.clone()))
                    .await
                    .unwrap()
                    .expect("entity should exist");

                assert_eq!(updated.key(), created.key());
                assert_ne!(updated, created);
                assert_eq!(repo.get(created.key()).await.unwrap(), Some(updated));
            }

            #[tokio::test]
            async fn test_concurrent_creates_get_unique_keys() {
                let repo = Arc::new($factory);
                let before = repo.list().await.unwrap().len();

                let mut handles = Vec::new();
                for _ in 0..32 {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move {
                        repo.create(sample()).await.unwrap()
                    }));
                }

                let mut keys = Vec::new();
                for handle in handles {
                    keys.push(handle.await.unwrap().key().clone());
                }

                for (i, key) in keys.iter().enumerate() {
                    assert!(
                        !keys[i + 1..].contains(key),
                        "key {} was handed out twice",
                        key
                    );
                }
                assert_eq!(repo.list().await.unwrap().len(), before + 32);
            }
        }
    };
}
