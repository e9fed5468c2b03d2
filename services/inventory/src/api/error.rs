//! API 错误响应

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use refa_errors::{AppError, ProblemDetails};
use serde::Serialize;
use tracing::{error, warn};

/// 错误响应体
///
/// 保留 `{message, error}` 信封，同时附带 RFC 7807 字段
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    error: bool,
    #[serde(flatten)]
    problem: ProblemDetails,
}

/// HTTP 层错误
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::validation(format!(
            "Malformed request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::validation(format!(
            "Malformed query string: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::validation(format!(
            "Malformed path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // 仓储不记录错误日志，由这里统一记录
        if status.is_server_error() {
            error!(kind = self.0.kind(), error = %self.0, "Request failed");
        } else {
            warn!(kind = self.0.kind(), error = %self.0, "Request rejected");
        }

        let body = ErrorBody {
            message: self.0.to_string(),
            error: true,
            problem: self.0.to_problem_details(),
        };

        (status, Json(body)).into_response()
    }
}
