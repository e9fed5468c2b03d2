//! ClientRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{map_sqlx_error, with_deadline};
use refa_errors::AppResult;

use crate::domain::dto::ClientDto;
use crate::domain::entities::Client;
use crate::domain::repositories::ClientRepository;
use crate::domain::value_objects::ClientId;

use super::converters::client_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::ClientRow;

#[async_trait]
impl ClientRepository for PostgresInventoryRepository {
    async fn insert_client(&self, client: &ClientDto) -> AppResult<ClientId> {
        with_deadline("insert_client", self.timeout, async {
            let id: i32 = sqlx::query_scalar(
                "INSERT INTO client (name, address, phone) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(&client.name)
            .bind(&client.address)
            .bind(&client.phone)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(ClientId(id))
        })
        .await
    }

    async fn list_clients(&self) -> AppResult<Vec<Client>> {
        with_deadline("list_clients", self.timeout, async {
            let rows = sqlx::query_as::<_, ClientRow>(
                "SELECT id, name, address, phone FROM client ORDER BY id",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(client_from_row).collect())
        })
        .await
    }

    async fn update_client(&self, id: ClientId, client: &ClientDto) -> AppResult<u64> {
        with_deadline("update_client", self.timeout, async {
            let result = sqlx::query(
                "UPDATE client SET name = $1, address = $2, phone = $3 WHERE id = $4",
            )
            .bind(&client.name)
            .bind(&client.address)
            .bind(&client.phone)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }

    async fn delete_client(&self, id: ClientId) -> AppResult<u64> {
        with_deadline("delete_client", self.timeout, async {
            let result = sqlx::query("DELETE FROM client WHERE id = $1")
                .bind(id.0)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }
}
