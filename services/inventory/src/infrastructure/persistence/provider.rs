//! ProviderRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{map_sqlx_error, with_deadline};
use refa_errors::AppResult;

use crate::domain::dto::ProviderDto;
use crate::domain::entities::Provider;
use crate::domain::repositories::ProviderRepository;
use crate::domain::value_objects::ProviderId;

use super::converters::provider_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::ProviderRow;

#[async_trait]
impl ProviderRepository for PostgresInventoryRepository {
    async fn insert_provider(&self, provider: &ProviderDto) -> AppResult<ProviderId> {
        with_deadline("insert_provider", self.timeout, async {
            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO provider (name, email, phone, enterprise, address, price)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(&provider.name)
            .bind(&provider.email)
            .bind(&provider.phone)
            .bind(&provider.enterprise)
            .bind(&provider.address)
            .bind(provider.price)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(ProviderId(id))
        })
        .await
    }

    async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        with_deadline("list_providers", self.timeout, async {
            let rows = sqlx::query_as::<_, ProviderRow>(
                r#"
                SELECT id, name, email, phone, enterprise, address, price
                FROM provider
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(provider_from_row).collect())
        })
        .await
    }

    async fn update_provider(&self, id: ProviderId, provider: &ProviderDto) -> AppResult<u64> {
        with_deadline("update_provider", self.timeout, async {
            let result = sqlx::query(
                r#"
                UPDATE provider
                SET name = $1,
                    email = $2,
                    phone = $3,
                    enterprise = $4,
                    address = $5,
                    price = $6
                WHERE id = $7
                "#,
            )
            .bind(&provider.name)
            .bind(&provider.email)
            .bind(&provider.phone)
            .bind(&provider.enterprise)
            .bind(&provider.address)
            .bind(provider.price)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }

    async fn delete_provider(&self, id: ProviderId) -> AppResult<u64> {
        with_deadline("delete_provider", self.timeout, async {
            let result = sqlx::query("DELETE FROM provider WHERE id = $1")
                .bind(id.0)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }
}
