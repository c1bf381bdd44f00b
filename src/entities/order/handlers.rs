//! Order-specific HTTP handlers

use super::model::{Order, ShippingAddress};
use super::store::OrderStore;
use crate::core::entity::Identified;
use crate::core::error::{ApiError, EntityError};
use crate::core::extractors::ValidatedJson;
use axum::extract::{Path, State};
use axum::response::Json;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: OrderStore,
}

/// PUT /api/Orders/{id}/shipping-address
pub async fn update_shipping_address(
    State(state): State<OrderAppState>,
    Path(id): Path<String>,
    ValidatedJson(address): ValidatedJson<ShippingAddress>,
) -> Result<Json<Order>, ApiError> {
    state
        .store
        .patch_shipping_address(&id, address)?
        .map(Json)
        .ok_or_else(|| EntityError::not_found(Order::resource_name(), &id).into())
}
