//! 响应信封

use axum::Json;
use refa_errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::{Value, json};

/// 消息响应 `{"message": "...", "error": false}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub error: bool,
    /// 新建记录的 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
            id: None,
        }
    }

    pub fn created(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            error: false,
            id: Some(id),
        }
    }
}

/// 列表响应 `{"<resource>": [...], "error": false}`
pub fn list_response<T: Serialize>(resource: &str, items: Vec<T>) -> Json<Value> {
    Json(json!({ resource: items, "error": false }))
}

/// 受影响行数为 0 时转换为 `NotFound`
pub fn ensure_found(rows: u64, what: impl std::fmt::Display) -> AppResult<()> {
    if rows == 0 {
        return Err(AppError::not_found(format!("{} not found", what)));
    }
    Ok(())
}
