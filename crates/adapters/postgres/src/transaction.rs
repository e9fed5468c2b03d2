//! PostgreSQL 事务管理模块

use refa_errors::AppResult;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::map_sqlx_error;

/// 开始事务
///
/// 返回的事务在未提交时被 drop 会自动回滚
pub async fn begin(pool: &PgPool) -> AppResult<Transaction<'static, Postgres>> {
    pool.begin().await.map_err(map_sqlx_error)
}

/// 提交事务
pub async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
    tx.commit().await.map_err(map_sqlx_error)
}

/// 回滚事务
pub async fn rollback(tx: Transaction<'static, Postgres>) -> AppResult<()> {
    tx.rollback().await.map_err(map_sqlx_error)
}
