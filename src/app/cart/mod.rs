pub mod handler;
pub mod model;
pub mod pricing;
pub mod service;
pub mod store;

pub use model::{CartItem, CartSnapshot, CartSummary, LineSelector};
pub use service::CartService;
pub use store::CartStore;
