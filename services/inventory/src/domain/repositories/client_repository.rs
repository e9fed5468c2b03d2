//! 客户仓储接口

use async_trait::async_trait;
use refa_errors::AppResult;

use crate::domain::dto::ClientDto;
use crate::domain::entities::Client;
use crate::domain::value_objects::ClientId;

/// 客户仓储接口
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn insert_client(&self, client: &ClientDto) -> AppResult<ClientId>;

    async fn list_clients(&self) -> AppResult<Vec<Client>>;

    async fn update_client(&self, id: ClientId, client: &ClientDto) -> AppResult<u64>;

    async fn delete_client(&self, id: ClientId) -> AppResult<u64>;
}
