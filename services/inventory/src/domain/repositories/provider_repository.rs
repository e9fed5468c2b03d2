//! 供应商仓储接口

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::dto::ProviderDto;
use crate::domain::entities::Provider;
use crate::domain::value_objects::ProviderId;

/// 供应商仓储接口
#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn insert_provider(&self, provider: &ProviderDto) -> AppResult<ProviderId>;

    /// 按 ID 升序列出
    async fn list_providers(&self) -> AppResult<Vec<Provider>>;

    async fn update_provider(&self, id: ProviderId, provider: &ProviderDto) -> AppResult<u64>;

    /// 仍被产品关联引用的供应商无法删除（外键 RESTRICT）
    async fn delete_provider(&self, id: ProviderId) -> AppResult<u64>;
}
