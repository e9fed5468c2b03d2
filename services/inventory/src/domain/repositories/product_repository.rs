//! 产品仓储接口

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::dto::ProductDto;
use crate::domain::entities::Product;
use crate::domain::value_objects::ProductId;

/// 产品仓储接口
///
/// 一个产品落在两张表上：product 行与 product_provider 关联行
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 创建产品及其供应商关联（同一事务），返回新产品 ID
    async fn insert_product(&self, product: &ProductDto) -> AppResult<ProductId>;

    /// 列出有供应商关联的产品，按产品 ID 升序
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// 整行替换产品并改写其供应商，返回产品行的受影响行数
    ///
    /// 产品不存在时返回 0，且不写入任何数据
    async fn update_product(&self, id: ProductId, product: &ProductDto) -> AppResult<u64>;

    /// 删除产品，关联行级联删除
    async fn delete_product(&self, id: ProductId) -> AppResult<u64>;
}
