//! Entity registry for managing entity descriptors and their CRUD routes

use axum::Router;
use std::collections::HashMap;

/// Prefix shared by every resource route
pub const API_PREFIX: &str = "/api";

/// Collection path for a resource (e.g. "CartItems" -> "/api/CartItems")
pub fn collection_path(plural: &str) -> String {
    format!("{}/{}", API_PREFIX, plural)
}

/// Trait that describes how to build routes for an entity
///
/// Each entity (CartItem, Order) implements this trait to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The collection segment of the route (e.g., "Orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /api/{plural}
    /// - GET/PUT/DELETE /api/{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it again replaces it.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
