//! # Cart API
//!
//! In-memory shopping cart and order backend for the storefront frontend.
//!
//! ## Features
//!
//! - **Generic keyed store**: [`IdentifiedStore`](storage::IdentifiedStore) handles key
//!   generation, upsert-on-create and safe deletes under a single lock
//! - **Cart items**: integer ids, seeded with the nut catalog on first access
//! - **Orders**: `ORD-XXXXXXXX` ids and a shipping-address patch
//! - **REST routes**: `/api/CartItems` and `/api/Orders` via axum
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_api::prelude::*;
//!
//! let module = StorefrontModule::new();
//! ServerBuilder::new()
//!     .with_config(ServerConfig::from_env()?)
//!     .register_module(module)
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod module;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Identified, KeyGenerator, SequentialKeys, StoreKey},
        error::{ApiError, EntityError, RequestError, StorageError, ValidationError},
        extractors::ValidatedJson,
        module::Module,
        service::Repository,
    };

    // === Entities ===
    pub use crate::entities::{
        cart_item::{CartItem, CartItemStore, seed_catalog},
        order::{Order, OrderIdTokens, OrderStore, ShippingAddress},
    };

    // === Storage ===
    pub use crate::storage::IdentifiedStore;

    // === Config ===
    pub use crate::config::{CorsConfig, ServerConfig};

    // === Server ===
    pub use crate::module::StorefrontModule;
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};
}
