//! 请求处理器
//!
//! 每个处理器只做解码、校验、调用仓储与结果映射

pub mod catalog;
pub mod client;
pub mod delivery;
pub mod product;
pub mod provider;
pub mod sale;

use serde::Deserialize;

/// `?id=` 查询参数
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}
