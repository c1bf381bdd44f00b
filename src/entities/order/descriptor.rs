//! Entity descriptor for Order

use super::handlers::{OrderAppState, update_shipping_address};
use super::model::Order;
use super::store::OrderStore;
use crate::server::crud::{
    CrudState, create_entity, delete_entity, get_entity, list_entities, update_entity,
};
use crate::server::entity_registry::{EntityDescriptor, collection_path};
use axum::{Router, routing::get, routing::put};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub store: OrderStore,
}

impl OrderDescriptor {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "Orders"
    }

    fn build_routes(&self) -> Router {
        let base = collection_path(self.plural());
        let crud = CrudState::<Order>::new(Arc::new(self.store.clone()), base.clone());
        let patch = OrderAppState {
            store: self.store.clone(),
        };

        let crud_routes = Router::new()
            .route(
                &base,
                get(list_entities::<Order>).post(create_entity::<Order>),
            )
            .route(
                &format!("{}/{{id}}", base),
                get(get_entity::<Order>)
                    .put(update_entity::<Order>)
                    .delete(delete_entity::<Order>),
            )
            .with_state(crud);

        let patch_routes = Router::new()
            .route(
                &format!("{}/{{id}}/shipping-address", base),
                put(update_shipping_address),
            )
            .with_state(patch);

        crud_routes.merge(patch_routes)
    }
}
