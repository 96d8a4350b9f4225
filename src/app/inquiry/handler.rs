//! 询价处理器

use axum::{extract::State, response::Json};
use validator::Validate;

use super::model::{BulkInquiryForm, ContactForm, InquiryReceipt};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactForm>,
) -> Result<Json<ApiResponse<InquiryReceipt>>, CoreError> {
    payload.validate()?;
    let (receipt, notice) = state.inquiry.submit_contact(&payload);
    Ok(Json(ApiResponse::success(receipt).with_notice(notice)))
}

pub async fn submit_bulk_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<BulkInquiryForm>,
) -> Result<Json<ApiResponse<InquiryReceipt>>, CoreError> {
    payload.validate()?;
    let (receipt, notice) = state.inquiry.submit_bulk(&payload);
    Ok(Json(ApiResponse::success(receipt).with_notice(notice)))
}
