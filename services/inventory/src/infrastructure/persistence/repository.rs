//! PostgreSQL 仓储

use std::time::Duration;

use refa_adapter_postgres::DEFAULT_QUERY_TIMEOUT;
use sqlx::PgPool;

/// PostgreSQL 库存仓储
///
/// 独占连接池的语句访问权；`Clone` 只复制池句柄
#[derive(Clone)]
pub struct PostgresInventoryRepository {
    pub(super) pool: PgPool,
    pub(super) timeout: Duration,
}

impl PostgresInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// 设置单次调用截止时间
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
