//! 核心响应处理模块

use serde::Serialize;
use uuid::Uuid;

use super::middleware::current_request_id;

/// API 响应结构
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub request_id: String,
    pub timestamp: String,
}

/// 提示消息（前端以 toast 形式展示）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            notice: None,
            request_id: current_request_id().unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
