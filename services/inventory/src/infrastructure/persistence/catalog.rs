//! CatalogRepository 实现

use async_trait::async_trait;
use refa_adapter_postgres::{map_sqlx_error, with_deadline};
use refa_errors::AppResult;

use crate::domain::entities::Category;
use crate::domain::repositories::CatalogRepository;

use super::converters::category_from_row;
use super::repository::PostgresInventoryRepository;
use super::rows::CategoryRow;

#[async_trait]
impl CatalogRepository for PostgresInventoryRepository {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        with_deadline("list_categories", self.timeout, async {
            let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM category ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            Ok(rows.into_iter().map(category_from_row).collect())
        })
        .await
    }

    async fn list_brands(&self) -> AppResult<Vec<String>> {
        with_deadline("list_brands", self.timeout, async {
            sqlx::query_scalar::<_, String>(
                "SELECT DISTINCT enterprise FROM provider ORDER BY enterprise",
            )
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
        })
        .await
    }
}
