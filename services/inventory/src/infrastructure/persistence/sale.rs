//! SaleRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{map_sqlx_error, with_deadline};
use refa_errors::AppResult;

use crate::domain::dto::SaleDto;
use crate::domain::entities::Sale;
use crate::domain::repositories::SaleRepository;
use crate::domain::value_objects::SaleId;

use super::converters::sale_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::SaleRow;

#[async_trait]
impl SaleRepository for PostgresInventoryRepository {
    async fn insert_sale(&self, sale: &SaleDto) -> AppResult<SaleId> {
        with_deadline("insert_sale", self.timeout, async {
            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO sale (product_id, client_id, date, total, subtotal, amount)
                VALUES ($1, $2, COALESCE($3, CURRENT_DATE), $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(sale.product_id.0)
            .bind(sale.client_id.map(|c| c.0))
            .bind(sale.date)
            .bind(sale.total)
            .bind(sale.subtotal)
            .bind(sale.amount)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(SaleId(id))
        })
        .await
    }

    async fn list_sales(&self) -> AppResult<Vec<Sale>> {
        with_deadline("list_sales", self.timeout, async {
            let rows = sqlx::query_as::<_, SaleRow>(
                r#"
                SELECT
                    s.id AS sale_id,
                    s.date,
                    s.total,
                    s.subtotal,
                    s.amount,
                    p.id AS product_id,
                    p.name AS product_name,
                    p.brand AS product_brand,
                    p.price AS product_price,
                    c.id AS client_id,
                    c.name AS client_name
                FROM sale s
                INNER JOIN product p ON p.id = s.product_id
                LEFT JOIN client c ON c.id = s.client_id
                ORDER BY s.id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(sale_from_row).collect())
        })
        .await
    }

    async fn update_sale(&self, id: SaleId, sale: &SaleDto) -> AppResult<u64> {
        with_deadline("update_sale", self.timeout, async {
            // 未提供日期时保留原值
            let result = sqlx::query(
                r#"
                UPDATE sale
                SET product_id = $1,
                    client_id = $2,
                    date = COALESCE($3, date),
                    total = $4,
                    subtotal = $5,
                    amount = $6
                WHERE id = $7
                "#,
            )
            .bind(sale.product_id.0)
            .bind(sale.client_id.map(|c| c.0))
            .bind(sale.date)
            .bind(sale.total)
            .bind(sale.subtotal)
            .bind(sale.amount)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }

    async fn delete_sale(&self, id: SaleId) -> AppResult<u64> {
        with_deadline("delete_sale", self.timeout, async {
            let result = sqlx::query("DELETE FROM sale WHERE id = $1")
                .bind(id.0)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }
}
