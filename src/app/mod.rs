//! 应用层：各业务模块与共享状态

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod inquiry;
pub mod site;

use std::sync::Arc;

use crate::infrastructure::config::Config;
use cart::CartService;
use catalog::CatalogService;
use checkout::CheckoutService;
use inquiry::InquiryService;
use site::SiteService;

/// 所有处理器共享的状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub cart: CartService,
    pub checkout: CheckoutService,
    pub inquiry: InquiryService,
    pub site: SiteService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = CatalogService::new();
        let cart = CartService::new();
        let checkout = CheckoutService::new(cart.clone(), config.checkout.clone());
        let site = SiteService::new(config.store.clone(), catalog.clone());

        Self {
            config: Arc::new(config),
            catalog,
            cart,
            checkout,
            inquiry: InquiryService::new(),
            site,
        }
    }
}
