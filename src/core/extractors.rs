//! Axum extractors for entity payloads
//!
//! [`ValidatedJson`] deserializes a request body and runs its `validator`
//! rules before the handler sees it. Both malformed JSON and failed rules are
//! reported as `400 Bad Request`.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::error::{ApiError, RequestError};

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| RequestError::InvalidBody {
                message: rejection.body_text(),
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
