//! 购物车处理器

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use validator::Validate;

use super::model::{
    AddToCartRequest, AddToCartResponse, CartBadge, CartSnapshot, CartView, LineQuery,
    UpdateQuantityRequest,
};
use super::pricing::summarize;
use crate::app::site::page::Page;
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    response::{ApiResponse, Notice},
};

pub async fn get_cart(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    let cart = state.cart.snapshot().await;
    let summary = summarize(cart.total, &state.config.checkout);
    Json(ApiResponse::success(CartView { cart, summary }))
}

pub async fn get_badge(State(state): State<AppState>) -> Json<ApiResponse<CartBadge>> {
    let item_count = state.cart.snapshot().await.item_count;
    Json(ApiResponse::success(CartBadge { item_count }))
}

pub async fn add_item(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> Result<Json<ApiResponse<AddToCartResponse>>, CoreError> {
    payload.validate()?;

    let product = state.catalog.get_product(&payload.product_id)?;
    let (item, cart) = state
        .cart
        .add_product(product, payload.quantity, payload.color.as_deref())
        .await?;

    let notice = Notice::new(
        format!("Added {} meters of {} to cart!", item.quantity, item.name),
        format!("Color: {}", item.color),
    );
    let redirect = payload.buy_now.then(|| Page::Cart.path());

    Ok(Json(
        ApiResponse::success(AddToCartResponse {
            item,
            cart,
            redirect,
        })
        .with_notice(notice),
    ))
}

pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(line): Query<LineQuery>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> Json<ApiResponse<CartSnapshot>> {
    let selector = line.into_selector(id);
    let cart = state.cart.update_quantity(&selector, payload.quantity).await;
    Json(ApiResponse::success(cart))
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(line): Query<LineQuery>,
) -> Json<ApiResponse<CartSnapshot>> {
    let selector = line.into_selector(id);
    let cart = state.cart.remove_item(&selector).await;
    Json(ApiResponse::success(cart))
}

pub async fn clear_cart(State(state): State<AppState>) -> Json<ApiResponse<CartSnapshot>> {
    Json(ApiResponse::success(state.cart.clear().await))
}
