//! 产品分类

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CategoryId;

/// 产品分类（只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
}
