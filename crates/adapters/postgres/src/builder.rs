//! PostgreSQL 连接池构建器

use std::str::FromStr;

use async_trait::async_trait;
use refa_errors::{AppError, AppResult};
use refa_ports::PoolBuilder;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::debug;

use crate::config::PoolSettings;
use crate::health::check_connection;

/// PostgreSQL 连接池构建器
///
/// 连接池以 lazy 方式创建，首次使用时才建立真实连接；
/// 启动阶段的可达性由 `PoolDirector::test_connection` 负责
pub struct PostgresPoolBuilder {
    settings: PoolSettings,
    options: Option<PgConnectOptions>,
    pool: Option<PgPool>,
}

impl Default for PostgresPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PostgresPoolBuilder {
    pub fn new() -> Self {
        Self::with_settings(PoolSettings::default())
    }

    pub fn with_settings(settings: PoolSettings) -> Self {
        Self {
            settings,
            options: None,
            pool: None,
        }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }
}

/// 解析连接串，仅接受 `postgres://` / `postgresql://` URL
pub fn parse_connection_string(connection_string: &str) -> AppResult<PgConnectOptions> {
    let trimmed = connection_string.trim();
    if !(trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://")) {
        return Err(AppError::configuration(
            "PostgreSQL connection string must be a postgres:// or postgresql:// URL",
        ));
    }

    PgConnectOptions::from_str(trimmed).map_err(|e| {
        AppError::configuration(format!("Invalid PostgreSQL connection string: {}", e))
    })
}

#[async_trait]
impl PoolBuilder for PostgresPoolBuilder {
    type Pool = PgPool;

    fn store_name(&self) -> &'static str {
        "postgres"
    }

    fn create_pool(&mut self, connection_string: &str) -> AppResult<()> {
        let options = parse_connection_string(connection_string)?;

        self.pool = Some(PgPoolOptions::new().connect_lazy_with(options.clone()));
        self.options = Some(options);
        Ok(())
    }

    fn configure_pool(&mut self) {
        let options = self
            .options
            .clone()
            .expect("configure_pool called before create_pool");

        // sqlx 的池参数在创建时固定，调优即用新参数替换尚未建立连接的 lazy 池
        self.pool = Some(self.settings.pool_options().connect_lazy_with(options));

        debug!(
            max_open = self.settings.max_open_connections,
            max_idle = self.settings.max_idle_connections,
            max_lifetime_secs = self.settings.max_lifetime.as_secs(),
            "PostgreSQL pool configured"
        );
    }

    fn get_pool(&self) -> PgPool {
        self.pool.clone().expect("get_pool called before create_pool")
    }

    async fn ping(pool: &PgPool) -> AppResult<()> {
        check_connection(pool).await
    }
}
