//! Generic CRUD handlers shared by every entity
//!
//! Each handler translates one HTTP verb into one [`Repository`] call and maps
//! absence to `404 Not Found`. Payload validation happens in the
//! [`ValidatedJson`] extractor before a handler runs.

use crate::core::entity::{Identified, StoreKey};
use crate::core::error::{ApiError, EntityError, RequestError};
use crate::core::extractors::ValidatedJson;
use crate::core::service::Repository;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use validator::Validate;

/// State shared by the CRUD routes of one entity
pub struct CrudState<T: Identified> {
    pub repository: Arc<dyn Repository<T>>,
    /// Collection path, used to build `Location` headers (e.g. "/api/CartItems")
    pub base_path: String,
}

impl<T: Identified> CrudState<T> {
    pub fn new(repository: Arc<dyn Repository<T>>, base_path: impl Into<String>) -> Self {
        Self {
            repository,
            base_path: base_path.into(),
        }
    }

    /// `Location` of the entity under `key`, with the key encoded as one path segment
    fn location_of(&self, key: &T::Key) -> Result<HeaderValue, ApiError> {
        let location = format!(
            "{}/{}",
            self.base_path,
            urlencoding::encode(&key.to_string())
        );
        HeaderValue::from_str(&location)
            .map_err(|e| ApiError::Internal(format!("invalid Location '{}': {}", location, e)))
    }
}

impl<T: Identified> Clone for CrudState<T> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            base_path: self.base_path.clone(),
        }
    }
}

/// GET /{collection}
pub async fn list_entities<T>(State(state): State<CrudState<T>>) -> Result<Json<Vec<T>>, ApiError>
where
    T: Identified + Serialize,
{
    Ok(Json(state.repository.list().await?))
}

/// GET /{collection}/{id}
pub async fn get_entity<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<T::Key>,
) -> Result<Json<T>, ApiError>
where
    T: Identified + Serialize,
    T::Key: DeserializeOwned,
{
    state
        .repository
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| EntityError::not_found(T::resource_name(), &id).into())
}

/// POST /{collection}
///
/// Responds `201 Created` with a `Location` header, including when an
/// existing key turned the create into an update. A caller-supplied key is
/// turned into its `Location` before the store is touched.
pub async fn create_entity<T>(
    State(state): State<CrudState<T>>,
    ValidatedJson(entity): ValidatedJson<T>,
) -> Result<Response, ApiError>
where
    T: Identified + Serialize + DeserializeOwned + Validate,
{
    let preset = if entity.key().is_unset() {
        None
    } else {
        Some(state.location_of(entity.key())?)
    };

    let created = state.repository.create(entity).await?;
    let location = match preset {
        Some(location) => location,
        None => state.location_of(created.key())?,
    };

    tracing::info!(
        entity = T::resource_name(),
        id = %created.key(),
        "entity created"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// PUT /{collection}/{id}
pub async fn update_entity<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<T::Key>,
    ValidatedJson(entity): ValidatedJson<T>,
) -> Result<Json<T>, ApiError>
where
    T: Identified + Serialize + DeserializeOwned + Validate,
    T::Key: DeserializeOwned,
{
    if entity.key() != &id {
        return Err(RequestError::IdMismatch {
            path_id: id.to_string(),
            body_id: entity.key().to_string(),
        }
        .into());
    }

    state
        .repository
        .update(entity)
        .await?
        .map(Json)
        .ok_or_else(|| EntityError::not_found(T::resource_name(), &id).into())
}

/// DELETE /{collection}/{id}
pub async fn delete_entity<T>(
    State(state): State<CrudState<T>>,
    Path(id): Path<T::Key>,
) -> Result<StatusCode, ApiError>
where
    T: Identified,
    T::Key: DeserializeOwned,
{
    if state.repository.delete(&id).await? {
        tracing::info!(entity = T::resource_name(), id = %id, "entity deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(EntityError::not_found(T::resource_name(), &id).into())
    }
}
