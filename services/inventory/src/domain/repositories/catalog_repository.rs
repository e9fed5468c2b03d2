//! 分类与品牌（只读）

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::entities::Category;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 按 ID 升序列出分类
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// 供应商企业名称去重后升序排列
    async fn list_brands(&self) -> AppResult<Vec<String>>;
}
