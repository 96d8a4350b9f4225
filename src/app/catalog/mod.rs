pub mod data;
pub mod filter;
pub mod handler;
pub mod model;
pub mod service;

pub use filter::ProductFilter;
pub use model::{PriceRange, Product};
pub use service::CatalogService;
