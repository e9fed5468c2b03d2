//! 到货仓储接口

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::dto::DeliveryDto;
use crate::domain::entities::Delivery;
use crate::domain::value_objects::{ProductId, ProviderId};

/// 到货仓储接口
///
/// 到货的增删都是对已有关联行的 UPDATE，从不插入或删除行
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// 写入到货日期与数量；没有对应的产品-供应商关联时返回 0
    async fn insert_delivery(&self, delivery: &DeliveryDto) -> AppResult<u64>;

    /// 只返回到货日期非空的关联
    async fn list_deliveries(&self) -> AppResult<Vec<Delivery>>;

    /// 将到货日期与数量置回 NULL
    async fn delete_delivery(&self, product_id: ProductId, provider_id: ProviderId) -> AppResult<u64>;
}
