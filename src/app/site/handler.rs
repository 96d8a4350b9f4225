//! 店铺信息处理器

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::service::{AboutView, ContactView, HomeView, PageResolution};
use crate::app::AppState;
use crate::core::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub path: String,
}

pub async fn home(State(state): State<AppState>) -> Json<ApiResponse<HomeView>> {
    Json(ApiResponse::success(state.site.home()))
}

pub async fn about(State(state): State<AppState>) -> Json<ApiResponse<AboutView>> {
    Json(ApiResponse::success(state.site.about()))
}

pub async fn contact_info(State(state): State<AppState>) -> Json<ApiResponse<ContactView>> {
    Json(ApiResponse::success(state.site.contact()))
}

pub async fn resolve_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ApiResponse<PageResolution>> {
    Json(ApiResponse::success(state.site.resolve(&query.path)))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
