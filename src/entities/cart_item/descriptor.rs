//! Entity descriptor for CartItem

use super::model::CartItem;
use super::store::CartItemStore;
use crate::server::crud::{
    CrudState, create_entity, delete_entity, get_entity, list_entities, update_entity,
};
use crate::server::entity_registry::{EntityDescriptor, collection_path};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the CartItem entity
pub struct CartItemDescriptor {
    pub store: CartItemStore,
}

impl CartItemDescriptor {
    pub fn new(store: CartItemStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for CartItemDescriptor {
    fn entity_type(&self) -> &str {
        "cart_item"
    }

    fn plural(&self) -> &str {
        "CartItems"
    }

    fn build_routes(&self) -> Router {
        let base = collection_path(self.plural());
        let state = CrudState::<CartItem>::new(Arc::new(self.store.clone()), base.clone());

        Router::new()
            .route(
                &base,
                get(list_entities::<CartItem>).post(create_entity::<CartItem>),
            )
            .route(
                &format!("{}/{{id}}", base),
                get(get_entity::<CartItem>)
                    .put(update_entity::<CartItem>)
                    .delete(delete_entity::<CartItem>),
            )
            .with_state(state)
    }
}
