//! Module system
//!
//! A module bundles the entities of one service and registers their routes.

use crate::server::entity_registry::EntityRegistry;

/// Trait for a service module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register entities with the entity registry
    ///
    /// Each entity descriptor provides the CRUD routes for that entity.
    fn register_entities(&self, registry: &mut EntityRegistry);
}
