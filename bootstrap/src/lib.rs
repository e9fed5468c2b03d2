//! refa-bootstrap - 统一服务启动骨架
//!
//! 加载配置 → 初始化日志 → 建立连接池 → 存活探测 → 启动 HTTP 服务

mod infrastructure;
mod runtime;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;
