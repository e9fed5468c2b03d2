//! ProductRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{begin, commit, map_sqlx_error, rollback, with_deadline};
use refa_errors::AppResult;

use crate::domain::dto::ProductDto;
use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

use super::converters::product_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::ProductRow;

#[async_trait]
impl ProductRepository for PostgresInventoryRepository {
    async fn insert_product(&self, product: &ProductDto) -> AppResult<ProductId> {
        // begin、两条 INSERT 与 commit 共用一个截止时间；超时丢弃 future 即回滚
        with_deadline("insert_product", self.timeout, async {
            let mut tx = begin(&self.pool).await?;

            let id: i32 = sqlx::query_scalar(
                r#"
                INSERT INTO product (name, brand, price, amount, description, category_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id
                "#,
            )
            .bind(&product.name)
            .bind(&product.brand)
            .bind(product.price)
            .bind(product.amount)
            .bind(&product.description)
            .bind(product.category_id.0)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            sqlx::query(
                r#"
                INSERT INTO product_provider (product_id, provider_id, delivery_date, amount)
                VALUES ($1, $2, NULL, NULL)
                "#,
            )
            .bind(id)
            .bind(product.provider_id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            commit(tx).await?;
            Ok(ProductId(id))
        })
        .await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        with_deadline("list_products", self.timeout, async {
            let rows = sqlx::query_as::<_, ProductRow>(
                r#"
                SELECT
                    p.id AS product_id,
                    p.name,
                    p.brand,
                    p.price,
                    p.amount,
                    p.description,
                    c.id AS category_id,
                    c.name AS category_name,
                    pr.id AS provider_id,
                    pr.name AS provider_name,
                    pr.email AS provider_email,
                    pr.phone AS provider_phone
                FROM product p
                INNER JOIN category c ON c.id = p.category_id
                INNER JOIN product_provider pp ON pp.product_id = p.id
                INNER JOIN provider pr ON pr.id = pp.provider_id
                ORDER BY p.id, pr.id
                "#,
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(product_from_row).collect())
        })
        .await
    }

    async fn update_product(&self, id: ProductId, product: &ProductDto) -> AppResult<u64> {
        with_deadline("update_product", self.timeout, async {
            let mut tx = begin(&self.pool).await?;

            let result = sqlx::query(
                r#"
                UPDATE product
                SET name = $1,
                    brand = $2,
                    category_id = $3,
                    price = $4,
                    amount = $5,
                    description = $6
                WHERE id = $7
                "#,
            )
            .bind(&product.name)
            .bind(&product.brand)
            .bind(product.category_id.0)
            .bind(product.price)
            .bind(product.amount)
            .bind(&product.description)
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

            if result.rows_affected() == 0 {
                rollback(tx).await?;
                return Ok(0);
            }

            sqlx::query("UPDATE product_provider SET provider_id = $1 WHERE product_id = $2")
                .bind(product.provider_id.0)
                .bind(id.0)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

            commit(tx).await?;
            Ok(result.rows_affected())
        })
        .await
    }

    async fn delete_product(&self, id: ProductId) -> AppResult<u64> {
        with_deadline("delete_product", self.timeout, async {
            let result = sqlx::query("DELETE FROM product WHERE id = $1")
                .bind(id.0)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(result.rows_affected())
        })
        .await
    }
}
