//! PostgreSQL 连接池配置模块
//!
//! 默认值即运维固定参数：最多 10 个连接、保留 5 个空闲连接、连接最长存活 5 分钟

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

/// 连接池调优参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    /// 最大打开连接数
    pub max_open_connections: u32,
    /// 空闲时保留的连接数
    ///
    /// sqlx 没有“最大空闲连接数”上限，这里映射为 `min_connections`，
    /// 超出部分在 `idle_timeout` 后被回收，长期空闲连接数收敛到该值
    pub max_idle_connections: u32,
    /// 连接最大生命周期
    pub max_lifetime: Duration,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_open_connections: 10,
            max_idle_connections: 5,
            max_lifetime: Duration::from_secs(5 * 60),
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

impl PoolSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置最大打开连接数
    pub fn with_max_open_connections(mut self, max: u32) -> Self {
        self.max_open_connections = max;
        self
    }

    /// 设置保留的空闲连接数
    pub fn with_max_idle_connections(mut self, idle: u32) -> Self {
        self.max_idle_connections = idle;
        self
    }

    /// 设置连接最大生命周期
    pub fn with_max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// 设置获取连接超时
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// 设置空闲超时
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// 转换为 sqlx 的连接池选项
    pub fn pool_options(&self) -> PgPoolOptions {
        let max = self.max_open_connections.max(1);

        PgPoolOptions::new()
            .max_connections(max)
            .min_connections(self.max_idle_connections.min(max))
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
    }
}
