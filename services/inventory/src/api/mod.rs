//! HTTP 接口层
//!
//! 路由、请求解码、响应信封与错误到状态码的映射；仓储通过 axum `State` 注入

mod error;
mod handlers;
mod ops;
mod response;
mod routes;

pub use error::{ApiError, ApiResult};
pub use ops::{OpsState, ops_routes};
pub use response::MessageResponse;
pub use routes::{
    AppState, REQUEST_TIMEOUT_GRACE, build_router, inventory_routes, request_timeout, with_layers,
};

#[cfg(test)]
mod tests;
