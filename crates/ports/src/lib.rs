//! ports - 抽象 trait 层
//!
//! 定义与具体存储无关的连接池接口及其编排逻辑

mod pool;

pub use pool::*;
