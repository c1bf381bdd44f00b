//! Typed error handling for the cart API
//!
//! The repositories never treat a missing key as an error: absence is reported
//! as `None`/`false`. The types here cover everything else that can go wrong
//! between an HTTP request and the store.
//!
//! # Error Categories
//!
//! - [`EntityError`]: Entity lookups that came back empty at the HTTP layer
//! - [`ValidationError`]: Request payloads rejected before reaching a store
//! - [`RequestError`]: Malformed requests (bad body, path/body id mismatch)
//! - [`StorageError`]: Infrastructure faults inside an in-memory store
//! - [`ConfigError`]: Configuration loading problems, reported at startup only
//!
//! # Example
//!
//! ```rust,ignore
//! use cart_api::prelude::*;
//!
//! async fn fetch(store: &CartItemStore, id: i64) -> Result<CartItem, ApiError> {
//!     store.get(&id).await?.ok_or_else(|| EntityError::not_found("cart item", id).into())
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the cart API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Entity-related errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Storage errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A response could not be assembled from a stored entity
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Entity(e) => e.status_code(),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Entity(e) => e.error_code(),
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id
                }))
            }
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ApiError::Request(RequestError::IdMismatch { path_id, body_id }) => {
                Some(serde_json::json!({
                    "path_id": path_id,
                    "body_id": body_id
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },
}

impl EntityError {
    /// Build a `NotFound` for any displayable key
    pub fn not_found(entity_type: &str, id: impl std::fmt::Display) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their validation rules
    #[error("Validation errors: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn format_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.into())
    }
}

/// Flatten nested validator output into dotted field paths (`items[0].price`)
fn collect_field_errors(
    prefix: &str,
    errors: &validator::ValidationErrors,
    out: &mut Vec<FieldValidationError>,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(FieldValidationError {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(&path, nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// Body could not be parsed into the expected shape
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// The id in the path does not match the id in the body
    #[error("Path id '{path_id}' does not match body id '{body_id}'")]
    IdMismatch { path_id: String, body_id: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidBody { .. } => "INVALID_BODY",
            RequestError::IdMismatch { .. } => "ID_MISMATCH",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Infrastructure faults inside an in-memory store
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    #[error("{store} store lock is poisoned")]
    LockPoisoned { store: &'static str },

    /// No unused key could be produced
    #[error("{store} store could not generate an unused key after {attempts} attempts")]
    KeySpaceExhausted { store: &'static str, attempts: usize },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Line {
        #[validate(range(min = 1))]
        quantity: i32,
    }

    #[derive(Validate)]
    struct Basket {
        #[validate(length(min = 1, message = "must not be empty"))]
        owner: String,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = EntityError::not_found("cart item", 42).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
        assert_eq!(err.to_string(), "cart item with id '42' not found");

        let body = err.to_response();
        let details = body.details.unwrap();
        assert_eq!(details["id"], "42");
        assert_eq!(details["entity_type"], "cart item");
    }

    #[test]
    fn test_id_mismatch_maps_to_400() {
        let err: ApiError = RequestError::IdMismatch {
            path_id: "1".to_string(),
            body_id: "2".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "ID_MISMATCH");
    }

    #[test]
    fn test_storage_errors_are_server_errors() {
        let err: ApiError = StorageError::LockPoisoned { store: "order" }.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert!(err.to_string().contains("poisoned"));
    }

    #[test]
    fn test_nested_validation_errors_are_flattened() {
        let basket = Basket {
            owner: String::new(),
            lines: vec![Line { quantity: 1 }, Line { quantity: 0 }],
        };
        let err: ApiError = basket.validate().unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let ApiError::Validation(ValidationError::FieldErrors(fields)) = err else {
            panic!("expected field errors");
        };
        let owner = fields.iter().find(|f| f.field == "owner").unwrap();
        assert_eq!(owner.message, "must not be empty");
        assert!(fields.iter().any(|f| f.field == "lines[1].quantity"));
        assert!(!fields.iter().any(|f| f.field == "lines[0].quantity"));
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::ParseError {
            file: Some("cart-api.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'cart-api.yaml': bad indent"
        );
    }
}
