//! inventory-service - 汽配库存与销售 HTTP 服务

use std::sync::Arc;

use inventory_service::api::{OpsState, build_router};
use inventory_service::domain::InventoryRepository;
use inventory_service::infrastructure::persistence::PostgresInventoryRepository;
use refa_bootstrap::{Infrastructure, run_http};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing inventory service...");

        let pool = infra.postgres_pool();
        let query_timeout = infra.query_timeout();
        let repo: Arc<dyn InventoryRepository> = Arc::new(
            PostgresInventoryRepository::new(pool.clone()).with_timeout(query_timeout),
        );
        info!(timeout_ms = query_timeout.as_millis() as u64, "Repository initialized");

        let ops = OpsState::new(pool, infra.metrics_handle(), query_timeout);
        build_router(repo, ops, query_timeout)
    })
    .await
}
