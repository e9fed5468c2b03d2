//! 单次调用截止时间
//!
//! 每次数据访问调用都从自身开始计时，调用之间不共享、不继承截止时间

use std::future::Future;
use std::time::Duration;

use refa_errors::{AppError, AppResult};
use tokio::time::Instant;
use tracing::debug;

/// 默认单次调用截止时间
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// 在独立截止时间内执行一个工作单元
///
/// 超时后 future 被丢弃（未提交的事务随之回滚），返回 `AppError::Timeout`，不做重试
pub async fn with_deadline<T, F>(operation: &'static str, timeout: Duration, future: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let started = Instant::now();

    let result = match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(AppError::timeout(format!(
            "{} exceeded its deadline of {} ms",
            operation,
            timeout.as_millis()
        ))),
    };

    let elapsed = started.elapsed();
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };

    metrics::counter!("repository_calls_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("repository_call_duration_seconds", "operation" => operation)
        .record(elapsed.as_secs_f64());

    debug!(
        operation,
        outcome,
        elapsed_ms = elapsed.as_millis() as u64,
        "Repository call finished"
    );

    result
}
