//! Persistence implementations
//!
//! 单个 `PostgresInventoryRepository` 实现全部仓储接口；
//! 每次调用都在独立的截止时间内完成，错误原样返回给调用方，不做重试

mod catalog;
mod client;
mod converters;
mod delivery;
mod product;
mod provider;
mod repository;
mod rows;
mod sale;

pub use repository::PostgresInventoryRepository;
