//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    BadRequest(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Conflict(_) => StatusCode::CONFLICT,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            CoreError::BadRequest(_) => "BAD_REQUEST",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::BadRequest(msg)
            | CoreError::Validation(msg)
            | CoreError::NotFound(msg)
            | CoreError::Conflict(msg)
            | CoreError::InternalServerError(msg) => write!(f, "{}: {}", self.kind(), msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            CoreError::InternalServerError(msg) => {
                // 内部错误只写日志，不把细节返回给客户端
                error!("内部错误: {}", msg);
                "Internal server error".to_string()
            }
            CoreError::BadRequest(msg)
            | CoreError::Validation(msg)
            | CoreError::NotFound(msg)
            | CoreError::Conflict(msg) => msg,
        };

        let error_response = ErrorResponse {
            error: kind.to_string(),
            message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        // field_errors 基于 HashMap，排序后输出稳定
        messages.sort();

        CoreError::Validation(messages.join(", "))
    }
}
