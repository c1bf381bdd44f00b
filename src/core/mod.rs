//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod extractors;
pub mod module;
pub mod service;

pub use entity::{Identified, KeyGenerator, SequentialKeys, StoreKey};
pub use error::{ApiError, EntityError, RequestError, StorageError, ValidationError};
pub use extractors::ValidatedJson;
pub use module::Module;
pub use service::Repository;
