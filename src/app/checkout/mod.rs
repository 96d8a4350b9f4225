pub mod handler;
pub mod model;
pub mod service;
pub mod session;

pub use model::{CheckoutStep, OrderConfirmation, PaymentMethod};
pub use service::CheckoutService;
pub use session::CheckoutSession;
