//! 核心中间件模块

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 当前请求的 request id；不在请求处理中时返回 `None`
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

/// 请求日志中间件
///
/// 为每个请求分配 request id（客户端已提供则沿用），并写回响应头。
pub async fn request_logging_middleware(mut req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let header_value = HeaderValue::from_str(&request_id).ok();
    if let Some(value) = header_value.clone() {
        req.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    // 处理器在同一任务内运行，响应体中的 request_id 与响应头一致
    let mut response = REQUEST_ID.scope(request_id.clone(), next.run(req)).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if let Some(value) = header_value {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    if status.is_server_error() {
        warn!(%method, %uri, status = status.as_u16(), elapsed_ms, %request_id, "请求失败");
    } else {
        info!(%method, %uri, status = status.as_u16(), elapsed_ms, %request_id, "请求完成");
    }

    response
}
