//! 领域层
//!
//! 包含实体（读模型）、输入 DTO 与校验、强类型 ID 以及仓储接口

pub mod dto;
pub mod entities;
pub mod repositories;
pub mod validation;
pub mod value_objects;

pub use dto::*;
pub use entities::*;
pub use repositories::*;
pub use validation::*;
pub use value_objects::*;
