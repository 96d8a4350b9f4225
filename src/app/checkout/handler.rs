//! 结算处理器

use axum::{extract::State, response::Json};
use validator::Validate;

use super::model::{CheckoutView, CustomerInfo, OrderConfirmation, PaymentDetails, ShippingAddress};
use crate::app::site::page::Page;
use crate::app::AppState;
use crate::core::{
    error::CoreError,
    response::{ApiResponse, Notice},
};

pub async fn get_checkout(State(state): State<AppState>) -> Json<ApiResponse<CheckoutView>> {
    Json(ApiResponse::success(state.checkout.view().await))
}

pub async fn save_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerInfo>,
) -> Result<Json<ApiResponse<CheckoutView>>, CoreError> {
    payload.validate()?;
    let view = state.checkout.set_customer(payload).await?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn save_shipping(
    State(state): State<AppState>,
    Json(payload): Json<ShippingAddress>,
) -> Result<Json<ApiResponse<CheckoutView>>, CoreError> {
    payload.validate()?;
    let view = state.checkout.set_shipping(payload).await?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn save_payment(
    State(state): State<AppState>,
    Json(payload): Json<PaymentDetails>,
) -> Result<Json<ApiResponse<CheckoutView>>, CoreError> {
    let view = state.checkout.set_payment(payload).await?;
    Ok(Json(ApiResponse::success(view)))
}

pub async fn next_step(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CheckoutView>>, CoreError> {
    Ok(Json(ApiResponse::success(state.checkout.advance().await?)))
}

pub async fn previous_step(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CheckoutView>>, CoreError> {
    Ok(Json(ApiResponse::success(state.checkout.back().await?)))
}

#[derive(Debug, serde::Serialize)]
pub struct PlacedOrder {
    pub order: OrderConfirmation,
    pub redirect: String,
}

pub async fn place_order(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PlacedOrder>>, CoreError> {
    // 在独立任务中处理，客户端断开也不会中断下单
    let checkout = state.checkout.clone();
    let order = match tokio::spawn(async move { checkout.place_order().await }).await {
        Ok(result) => result?,
        Err(e) => {
            state.checkout.reopen().await;
            return Err(CoreError::InternalServerError(format!(
                "下单任务异常: {}",
                e
            )));
        }
    };

    let notice = Notice::new(
        "Order Placed Successfully!",
        format!("Order ID: {}", order.order_id),
    );
    Ok(Json(
        ApiResponse::success(PlacedOrder {
            order,
            redirect: Page::OrderSuccess.path(),
        })
        .with_notice(notice),
    ))
}

pub async fn order_success(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OrderConfirmation>>, CoreError> {
    Ok(Json(ApiResponse::success(state.checkout.last_order().await?)))
}
