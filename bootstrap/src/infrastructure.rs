//! 基础设施资源管理
//!
//! 连接池在这里创建一次，随后通过依赖注入交给请求处理层，不存在全局仓储实例

use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
pub use refa_adapter_postgres::PoolStatus;
use refa_adapter_postgres::{PoolSettings, PostgresPoolBuilder, pool_status};
use refa_config::{AppConfig, DatabaseConfig, ServerConfig};
use refa_errors::AppResult;
use refa_ports::PoolDirector;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

/// 基础设施资源容器
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
    /// Prometheus 渲染句柄
    metrics_handle: Option<PrometheusHandle>,
}

/// 由数据库配置得到连接池调优参数
pub fn pool_settings(config: &DatabaseConfig) -> PoolSettings {
    PoolSettings::new()
        .with_max_open_connections(config.max_open_connections)
        .with_max_idle_connections(config.max_idle_connections)
        .with_max_lifetime(config.max_lifetime())
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 连接串非法或存活探测失败都直接返回错误，启动阶段不做重试
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let mut builder = PostgresPoolBuilder::with_settings(pool_settings(&config.database));
        let postgres_pool =
            PoolDirector::connect(&mut builder, config.database.url.expose_secret())?;

        PoolDirector::test_connection::<PostgresPoolBuilder>(&postgres_pool).await?;
        info!(
            max_open_connections = config.database.max_open_connections,
            max_idle_connections = config.database.max_idle_connections,
            "PostgreSQL connection verified"
        );

        Ok(Self {
            config,
            postgres_pool,
            metrics_handle: None,
        })
    }

    /// 附加 Prometheus 渲染句柄
    pub fn with_metrics_handle(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取服务器配置
    pub fn server_config(&self) -> &ServerConfig {
        &self.config.server
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 单次数据访问调用的截止时间
    pub fn query_timeout(&self) -> Duration {
        self.config.database.query_timeout()
    }

    /// 获取 Prometheus 渲染句柄
    pub fn metrics_handle(&self) -> Option<PrometheusHandle> {
        self.metrics_handle.clone()
    }

    /// 获取 PostgreSQL 连接池状态
    pub fn postgres_pool_status(&self) -> PoolStatus {
        pool_status(&self.postgres_pool)
    }
}
