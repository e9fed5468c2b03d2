//! inventory-service - 汽配库存与销售服务

pub mod api;
pub mod domain;
pub mod infrastructure;
