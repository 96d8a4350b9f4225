//! 路由配置

use axum::{
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::{cart, catalog, checkout, inquiry, site, AppState};
use crate::core::{error::CoreError, middleware::request_logging_middleware};

pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.http.timeout_seconds);

    let api = Router::new()
        // 商品目录
        .route("/products", get(catalog::handler::list_products))
        .route("/products/:id", get(catalog::handler::get_product))
        .route("/categories", get(catalog::handler::list_categories))
        // 购物车
        .route(
            "/cart",
            get(cart::handler::get_cart).delete(cart::handler::clear_cart),
        )
        .route("/cart/count", get(cart::handler::get_badge))
        .route("/cart/items", post(cart::handler::add_item))
        .route(
            "/cart/items/:id",
            patch(cart::handler::update_quantity).delete(cart::handler::remove_item),
        )
        // 结算
        .route("/checkout", get(checkout::handler::get_checkout))
        .route("/checkout/customer", put(checkout::handler::save_customer))
        .route("/checkout/shipping", put(checkout::handler::save_shipping))
        .route("/checkout/payment", put(checkout::handler::save_payment))
        .route("/checkout/next", post(checkout::handler::next_step))
        .route("/checkout/back", post(checkout::handler::previous_step))
        .route("/checkout/submit", post(checkout::handler::place_order))
        .route("/order-success", get(checkout::handler::order_success))
        // 表单
        .route("/bulk-inquiry", post(inquiry::handler::submit_bulk_inquiry))
        .route(
            "/contact",
            get(site::handler::contact_info).post(inquiry::handler::submit_contact),
        )
        // 静态内容
        .route("/home", get(site::handler::home))
        .route("/about", get(site::handler::about))
        .route("/pages", get(site::handler::resolve_page));

    Router::new()
        .route("/health", get(site::handler::health_check))
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found() -> CoreError {
    CoreError::NotFound("Page not found".to_string())
}
