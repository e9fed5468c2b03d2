//! 连接池构建接口
//!
//! 编排器只通过 `PoolBuilder` 的三步生命周期（创建 → 调优 → 获取）与具体存储交互，
//! 替换存储实现无需修改编排器。

use async_trait::async_trait;
use refa_errors::AppResult;
use tracing::info;

/// 连接池构建器
#[async_trait]
pub trait PoolBuilder: Send {
    /// 共享、线程安全的连接池句柄
    type Pool: Clone + Send + Sync + 'static;

    /// 存储名称（仅用于日志）
    fn store_name(&self) -> &'static str;

    /// 解析连接串并创建连接池句柄（不一定建立真实连接）
    ///
    /// 连接串格式错误时返回 `AppError::Configuration`
    fn create_pool(&mut self, connection_string: &str) -> AppResult<()>;

    /// 按固定运维参数调优连接池
    ///
    /// # Panics
    ///
    /// 在 `create_pool` 成功之前调用属于编程错误，实现应直接 panic
    fn configure_pool(&mut self);

    /// 获取连接池句柄；多次调用返回同一个池
    fn get_pool(&self) -> Self::Pool;

    /// 存活探测
    async fn ping(pool: &Self::Pool) -> AppResult<()>;
}

/// 连接池编排器
pub struct PoolDirector;

impl PoolDirector {
    /// 依次执行 create → configure，返回连接池句柄
    pub fn connect<B: PoolBuilder>(builder: &mut B, connection_string: &str) -> AppResult<B::Pool> {
        builder.create_pool(connection_string)?;
        builder.configure_pool();

        info!(store = builder.store_name(), "Connection pool created and configured");
        Ok(builder.get_pool())
    }

    /// 启动阶段的存活探测
    ///
    /// 失败时应中止启动，运行期不做重试
    pub async fn test_connection<B: PoolBuilder>(pool: &B::Pool) -> AppResult<()> {
        B::ping(pool).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use refa_errors::AppError;

    use super::*;

    #[derive(Clone, Default)]
    struct FakePool {
        reachable: bool,
        tuned: Arc<Mutex<bool>>,
    }

    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<&'static str>,
        pool: Option<FakePool>,
        reachable: bool,
    }

    #[async_trait]
    impl PoolBuilder for RecordingBuilder {
        type Pool = FakePool;

        fn store_name(&self) -> &'static str {
            "fake"
        }

        fn create_pool(&mut self, connection_string: &str) -> AppResult<()> {
            self.calls.push("create");
            if !connection_string.starts_with("fake://") {
                return Err(AppError::configuration("unsupported scheme"));
            }
            self.pool = Some(FakePool {
                reachable: self.reachable,
                tuned: Arc::default(),
            });
            Ok(())
        }

        fn configure_pool(&mut self) {
            self.calls.push("configure");
            let pool = self.pool.as_ref().expect("configure_pool called before create_pool");
            *pool.tuned.lock().unwrap() = true;
        }

        fn get_pool(&self) -> FakePool {
            self.pool.clone().expect("get_pool called before create_pool")
        }

        async fn ping(pool: &FakePool) -> AppResult<()> {
            if pool.reachable {
                Ok(())
            } else {
                Err(AppError::connection("unreachable"))
            }
        }
    }

    #[test]
    fn test_connect_runs_create_then_configure() {
        let mut builder = RecordingBuilder {
            reachable: true,
            ..Default::default()
        };

        let pool = PoolDirector::connect(&mut builder, "fake://db").unwrap();

        assert_eq!(builder.calls, vec!["create", "configure"]);
        assert!(*pool.tuned.lock().unwrap());
    }

    #[test]
    fn test_connect_stops_on_invalid_config() {
        let mut builder = RecordingBuilder::default();

        let result = PoolDirector::connect(&mut builder, "mysql://db");

        assert!(matches!(result, Err(AppError::Configuration(_))));
        assert_eq!(builder.calls, vec!["create"]);
    }

    #[test]
    fn test_get_pool_returns_same_handle() {
        let mut builder = RecordingBuilder::default();
        PoolDirector::connect(&mut builder, "fake://db").unwrap();

        let a = builder.get_pool();
        let b = builder.get_pool();
        assert!(Arc::ptr_eq(&a.tuned, &b.tuned));
    }

    #[tokio::test]
    async fn test_connection_probe() {
        let mut builder = RecordingBuilder {
            reachable: true,
            ..Default::default()
        };
        let pool = PoolDirector::connect(&mut builder, "fake://db").unwrap();
        assert!(PoolDirector::test_connection::<RecordingBuilder>(&pool).await.is_ok());

        let mut builder = RecordingBuilder::default();
        let pool = PoolDirector::connect(&mut builder, "fake://db").unwrap();
        let result = PoolDirector::test_connection::<RecordingBuilder>(&pool).await;
        assert!(matches!(result, Err(AppError::Connection(_))));
    }
}
