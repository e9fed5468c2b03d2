//! 路由

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, StatusCode, header},
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{catalog, client, delivery, product, provider, sale};
use super::ops::{OpsState, ops_routes};
use crate::domain::InventoryRepository;

/// HTTP 请求时限在单次数据访问截止时间之上的余量
///
/// 仓储先超时，客户端收到带错误信封的 504
pub const REQUEST_TIMEOUT_GRACE: Duration = Duration::from_secs(1);

/// 由数据访问截止时间推导 HTTP 请求时限
pub fn request_timeout(query_timeout: Duration) -> Duration {
    query_timeout + REQUEST_TIMEOUT_GRACE
}

/// 请求处理层共享状态
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn InventoryRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn InventoryRepository>) -> Self {
        Self { repo }
    }
}

/// 业务路由
pub fn inventory_routes(repo: Arc<dyn InventoryRepository>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api_v1_routes())
        .with_state(AppState::new(repo))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            get(product::list_products)
                .post(product::create_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/provider",
            get(provider::list_providers)
                .post(provider::create_provider)
                .put(provider::update_provider)
                .delete(provider::delete_provider),
        )
        .route(
            "/sale",
            get(sale::list_sales)
                .post(sale::create_sale)
                .put(sale::update_sale)
                .delete(sale::delete_sale),
        )
        .route(
            "/delivery",
            get(delivery::list_deliveries)
                .post(delivery::create_delivery)
                .delete(delivery::delete_delivery),
        )
        .route("/client", get(client::list_clients).post(client::create_client))
        .route(
            "/client/{id}",
            put(client::update_client).delete(client::delete_client),
        )
        .route("/brand", get(catalog::list_brands))
        .route("/category", get(catalog::list_categories))
}

async fn root() -> &'static str {
    "Server is working"
}

/// 通用中间件：超时、请求追踪、CORS
pub fn with_layers(router: Router, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// 完整应用路由（业务路由 + 健康检查 / metrics）
pub fn build_router(
    repo: Arc<dyn InventoryRepository>,
    ops: OpsState,
    query_timeout: Duration,
) -> Router {
    with_layers(
        inventory_routes(repo).merge(ops_routes(ops)),
        request_timeout(query_timeout),
    )
}
