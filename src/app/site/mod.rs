pub mod content;
pub mod handler;
pub mod links;
pub mod page;
pub mod service;

pub use page::Page;
pub use service::SiteService;
