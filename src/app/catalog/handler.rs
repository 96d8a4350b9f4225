//! 商品目录处理器

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use tracing::debug;

use super::filter::ProductFilter;
use super::model::{Category, ProductDetail, ProductListing, ProductQuery};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<ApiResponse<ProductListing>> {
    let filter = ProductFilter::from_query(&query);
    let listing = state.catalog.list(&filter);
    debug!(
        category = %listing.category,
        search = %filter.search,
        count = listing.count,
        "商品筛选"
    );
    Json(ApiResponse::success(listing))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, CoreError> {
    let detail = state.catalog.detail(&id)?;
    Ok(Json(ApiResponse::success(detail)))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<&'static [Category]>> {
    Json(ApiResponse::success(state.catalog.categories()))
}
