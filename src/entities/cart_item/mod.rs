//! Cart item entity module

pub mod catalog;
pub mod descriptor;
pub mod model;
pub mod store;

pub use catalog::seed_catalog;
pub use descriptor::CartItemDescriptor;
pub use model::CartItem;
pub use store::CartItemStore;
