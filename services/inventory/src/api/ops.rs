//! 运维端点：健康检查与 Prometheus metrics

use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use refa_adapter_postgres::{HealthCheckResult, check_health};
use serde::Serialize;
use sqlx::PgPool;

/// 运维端点状态
#[derive(Clone)]
pub struct OpsState {
    pool: PgPool,
    metrics: Option<PrometheusHandle>,
    health_timeout: Duration,
}

impl OpsState {
    pub fn new(pool: PgPool, metrics: Option<PrometheusHandle>, health_timeout: Duration) -> Self {
        Self {
            pool,
            metrics,
            health_timeout,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: HealthCheckResult,
}

pub fn ops_routes(state: OpsState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<OpsState>) -> impl IntoResponse {
    let database = check_health(&state.pool, state.health_timeout).await;
    let (code, status) = if database.healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

async fn metrics_handler(State(state): State<OpsState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            handle.render(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
