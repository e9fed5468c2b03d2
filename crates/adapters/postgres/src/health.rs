//! PostgreSQL 健康检查模块
//!
//! 提供存活探测与连接池状态

use std::time::{Duration, Instant};

use refa_errors::{AppError, AppResult};
use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;

/// 连接池状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

/// 健康检查结果
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 连接池状态
    pub pool_status: PoolStatus,
}

/// 获取连接池状态
pub fn pool_status(pool: &PgPool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle() as u32;
    PoolStatus {
        size,
        idle,
        active: size.saturating_sub(idle),
    }
}

/// 存活探测（ping）
///
/// 使用驱动默认超时，不额外设置截止时间
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::connection(format!("Database health check failed: {}", e)))?;
    Ok(())
}

/// 带超时的健康检查（供 `/health` 端点使用）
pub async fn check_health(pool: &PgPool, timeout: Duration) -> HealthCheckResult {
    let start = Instant::now();

    let (healthy, error) = match tokio::time::timeout(timeout, check_connection(pool)).await {
        Ok(Ok(())) => (true, None),
        Ok(Err(e)) => (false, Some(e.to_string())),
        Err(_) => (false, Some("Health check timed out".to_string())),
    };

    let latency_ms = healthy.then(|| start.elapsed().as_millis() as u64);
    debug!(healthy, latency_ms, "PostgreSQL health check finished");

    HealthCheckResult {
        healthy,
        latency_ms,
        error,
        pool_status: pool_status(pool),
    }
}
