//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use refa_config::AppConfig;
use refa_telemetry::init_metrics;
use tracing::{error, info};

use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 这是服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 通过 `PoolDirector` 建立连接池并做存活探测（失败即中止启动）
/// 5. 调用用户提供的闭包构建 `Router`
/// 6. 启动服务器并处理 graceful shutdown，退出前关闭连接池
///
/// # 示例
///
/// ```ignore
/// use refa_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |infra| async move {
///         build_router(infra.postgres_pool())
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(config_dir: &str, router_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = Router>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics_handle = init_metrics()?;

    // 4. 创建基础设施
    let infra = match Infrastructure::from_config(config.clone()).await {
        Ok(infra) => infra.with_metrics_handle(metrics_handle),
        Err(e) => {
            error!(error = %e, "Failed to initialize infrastructure, aborting startup");
            return Err(e.into());
        }
    };
    let pool = infra.postgres_pool();

    // 5. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. 构建路由
    let router = router_builder(infra).await;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server starting");

    // 7. 启动服务器
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 8. 清理
    pool.close().await;

    info!("Service stopped");

    Ok(())
}
