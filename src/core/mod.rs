//! 核心层：错误、响应与中间件

pub mod error;
pub mod middleware;
pub mod response;

pub use error::CoreError;
pub use response::{ApiResponse, Notice};
