//! DeliveryRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{map_sqlx_error, with_deadline};
use refa_errors::AppResult;

use crate::domain::dto::DeliveryDto;
use crate::domain::entities::Delivery;
use crate::domain::repositories::DeliveryRepository;
use crate::domain::value_objects::{ProductId, ProviderId};

use super::converters::delivery_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::DeliveryRow;

#[async_trait]
impl DeliveryRepository for PostgresInventoryRepository {
    async fn insert_delivery(&self, delivery: &DeliveryDto) -> AppResult<u64> {
        with_deadline("insert_delivery", self.timeout, async {
            let result = sqlx::query(
                r#"
                UPDATE product_provider
                SET delivery_date = $1, amount = $2
                WHERE product_id = $3 AND provider_id = $4
                "#,
            )
            .bind(delivery.delivery_date)
            .bind(delivery.amount)
            .bind(delivery.product_id.0)
            .bind(delivery.provider_id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }

    async fn list_deliveries(&self) -> AppResult<Vec<Delivery>> {
        with_deadline("list_deliveries", self.timeout, async {
            let rows = sqlx::query_as::<_, DeliveryRow>(
                r#"
                SELECT
                    p.id AS product_id,
                    p.name AS product_name,
                    p.brand AS product_brand,
                    pr.id AS provider_id,
                    pr.name AS provider_name,
                    pr.email AS provider_email,
                    pp.delivery_date,
                    pp.amount
                FROM product_provider pp
                INNER JOIN product p ON p.id = pp.product_id
                INNER JOIN provider pr ON pr.id = pp.provider_id
                WHERE pp.delivery_date IS NOT NULL
                ORDER BY pp.product_id, pp.provider_id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(delivery_from_row).collect())
        })
        .await
    }

    async fn delete_delivery(&self, product_id: ProductId, provider_id: ProviderId) -> AppResult<u64> {
        with_deadline("delete_delivery", self.timeout, async {
            let result = sqlx::query(
                r#"
                UPDATE product_provider
                SET delivery_date = NULL, amount = NULL
                WHERE product_id = $1 AND provider_id = $2
                "#,
            )
            .bind(product_id.0)
            .bind(provider_id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }
}
