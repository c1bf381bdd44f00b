//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for all entities declared in modules
//! - Health check routes

pub mod builder;
pub mod crud;
pub mod entity_registry;

pub use builder::ServerBuilder;
pub use entity_registry::{API_PREFIX, EntityDescriptor, EntityRegistry};
