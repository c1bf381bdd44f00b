//! Storage implementations

pub mod in_memory;

pub use in_memory::{IdentifiedStore, MAX_KEY_ATTEMPTS};
