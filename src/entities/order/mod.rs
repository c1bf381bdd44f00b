//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::OrderDescriptor;
pub use model::{Order, OrderIdTokens, ShippingAddress};
pub use store::OrderStore;
