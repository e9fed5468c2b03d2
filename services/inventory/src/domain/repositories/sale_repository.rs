//! 销售仓储接口

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::dto::SaleDto;
use crate::domain::entities::Sale;
use crate::domain::value_objects::SaleId;

/// 销售仓储接口
#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn insert_sale(&self, sale: &SaleDto) -> AppResult<SaleId>;

    /// 按 ID 升序列出
    async fn list_sales(&self) -> AppResult<Vec<Sale>>;

    async fn update_sale(&self, id: SaleId, sale: &SaleDto) -> AppResult<u64>;

    async fn delete_sale(&self, id: SaleId) -> AppResult<u64>;
}
