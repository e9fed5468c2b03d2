use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::NaiveDate;
use mockall::{mock, predicate::eq};
use refa_adapter_postgres::{DEFAULT_QUERY_TIMEOUT, with_deadline};
use refa_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::{ApiResult, inventory_routes, request_timeout, with_layers};
use crate::domain::*;

mock! {
    pub Repo {}

    #[async_trait]
    impl ProductRepository for Repo {
        async fn insert_product(&self, product: &ProductDto) -> AppResult<ProductId>;
        async fn list_products(&self) -> AppResult<Vec<Product>>;
        async fn update_product(&self, id: ProductId, product: &ProductDto) -> AppResult<u64>;
        async fn delete_product(&self, id: ProductId) -> AppResult<u64>;
    }

    #[async_trait]
    impl ProviderRepository for Repo {
        async fn insert_provider(&self, provider: &ProviderDto) -> AppResult<ProviderId>;
        async fn list_providers(&self) -> AppResult<Vec<Provider>>;
        async fn update_provider(&self, id: ProviderId, provider: &ProviderDto) -> AppResult<u64>;
        async fn delete_provider(&self, id: ProviderId) -> AppResult<u64>;
    }

    #[async_trait]
    impl SaleRepository for Repo {
        async fn insert_sale(&self, sale: &SaleDto) -> AppResult<SaleId>;
        async fn list_sales(&self) -> AppResult<Vec<Sale>>;
        async fn update_sale(&self, id: SaleId, sale: &SaleDto) -> AppResult<u64>;
        async fn delete_sale(&self, id: SaleId) -> AppResult<u64>;
    }

    #[async_trait]
    impl ClientRepository for Repo {
        async fn insert_client(&self, client: &ClientDto) -> AppResult<ClientId>;
        async fn list_clients(&self) -> AppResult<Vec<Client>>;
        async fn update_client(&self, id: ClientId, client: &ClientDto) -> AppResult<u64>;
        async fn delete_client(&self, id: ClientId) -> AppResult<u64>;
    }

    #[async_trait]
    impl DeliveryRepository for Repo {
        async fn insert_delivery(&self, delivery: &DeliveryDto) -> AppResult<u64>;
        async fn list_deliveries(&self) -> AppResult<Vec<Delivery>>;
        async fn delete_delivery(&self, product_id: ProductId, provider_id: ProviderId) -> AppResult<u64>;
    }

    #[async_trait]
    impl CatalogRepository for Repo {
        async fn list_categories(&self) -> AppResult<Vec<Category>>;
        async fn list_brands(&self) -> AppResult<Vec<String>>;
    }
}

fn router(repo: MockRepo) -> Router {
    inventory_routes(Arc::new(repo))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn product_body() -> Value {
    json!({
        "name": "Pad",
        "brand": "Bosch",
        "price": 19.99,
        "amount": 10,
        "description": "desc",
        "category_id": 1,
        "provider_id": 2
    })
}

fn sample_product() -> Product {
    Product {
        product_id: ProductId(1),
        name: "Pad".to_string(),
        brand: "Bosch".to_string(),
        price: Decimal::new(1999, 2),
        amount: 10,
        description: "desc".to_string(),
        category: Category {
            category_id: CategoryId(1),
            name: "Brakes".to_string(),
        },
        provider: ProviderSummary {
            provider_id: ProviderId(2),
            name: "ACME".to_string(),
            email: "a@x.com".to_string(),
            phone: "5551234".to_string(),
        },
    }
}

#[tokio::test]
async fn test_root_is_alive() {
    let response = router(MockRepo::new())
        .oneshot(get("/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Server is working");
}

#[tokio::test]
async fn test_list_products_envelope() {
    let mut repo = MockRepo::new();
    repo.expect_list_products()
        .times(1)
        .returning(|| Ok(vec![sample_product()]));

    let (status, body) = send(router(repo), get("/api/v1/product")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], false);
    assert_eq!(body["products"][0]["name"], "Pad");
    assert_eq!(body["products"][0]["category"]["name"], "Brakes");
    assert_eq!(body["products"][0]["provider"]["name"], "ACME");
}

#[tokio::test]
async fn test_create_product() {
    let mut repo = MockRepo::new();
    repo.expect_insert_product()
        .withf(|p| p.name == "Pad" && p.provider_id == ProviderId(2) && p.price == Decimal::new(1999, 2))
        .times(1)
        .returning(|_| Ok(ProductId(7)));

    let (status, body) = send(
        router(repo),
        json_request(Method::POST, "/api/v1/product", product_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["error"], false);
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    // 没有设置任何期望：仓储一旦被调用即 panic
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/product")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(router(MockRepo::new()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_invalid_provider_is_rejected_before_repository() {
    let body = json!({
        "name": "ACME",
        "email": "not-an-email",
        "phone": "5551234",
        "enterprise": "ACME Corp"
    });

    let (status, body) = send(
        router(MockRepo::new()),
        json_request(Method::POST, "/api/v1/provider", body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let mut repo = MockRepo::new();
    repo.expect_update_product()
        .withf(|id, _| *id == ProductId(99))
        .times(1)
        .returning(|_, _| Ok(0));

    let (status, body) = send(
        router(repo),
        json_request(Method::PUT, "/api/v1/product?id=99", product_body()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_update_without_id_is_bad_request() {
    let (status, _) = send(
        router(MockRepo::new()),
        json_request(Method::PUT, "/api/v1/product", product_body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_product() {
    let mut repo = MockRepo::new();
    repo.expect_delete_product()
        .with(eq(ProductId(3)))
        .times(1)
        .returning(|_| Ok(1));

    let (status, body) = send(router(repo), delete("/api/v1/product?id=3")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");
}

#[tokio::test]
async fn test_timeout_maps_to_gateway_timeout() {
    let mut repo = MockRepo::new();
    repo.expect_list_sales()
        .returning(|| Err(AppError::timeout("list_sales exceeded its deadline of 5000 ms")));

    let (status, body) = send(router(repo), get("/api/v1/sale")).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["error"], true);
}

async fn stalled_sales() -> ApiResult<Json<Value>> {
    let sales: Vec<Sale> = with_deadline("list_sales", DEFAULT_QUERY_TIMEOUT, async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    })
    .await?;
    Ok(Json(json!({ "sales": sales, "error": false })))
}

async fn stalled_forever() -> &'static str {
    tokio::time::sleep(Duration::from_secs(60)).await;
    "done"
}

#[test]
fn test_request_timeout_outlasts_query_deadline() {
    assert!(request_timeout(DEFAULT_QUERY_TIMEOUT) > DEFAULT_QUERY_TIMEOUT);
}

#[tokio::test(start_paused = true)]
async fn test_query_deadline_wins_over_request_timeout() {
    let app = with_layers(
        Router::new().route("/api/v1/sale", axum::routing::get(stalled_sales)),
        request_timeout(DEFAULT_QUERY_TIMEOUT),
    );

    let (status, body) = send(app, get("/api/v1/sale")).await;

    // 仓储的 Timeout 先触发，响应带错误信封
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["error"], true);
    assert_eq!(body["title"], "Deadline Exceeded");
}

#[tokio::test(start_paused = true)]
async fn test_request_timeout_layer_is_gateway_timeout() {
    let app = with_layers(
        Router::new().route("/slow", axum::routing::get(stalled_forever)),
        Duration::from_secs(1),
    );

    let (status, _) = send(app, get("/slow")).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_execution_error_maps_to_internal_error() {
    let mut repo = MockRepo::new();
    repo.expect_list_providers()
        .returning(|| Err(AppError::execution("relation \"provider\" does not exist")));

    let (status, body) = send(router(repo), get("/api/v1/provider")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["title"], "Persistence Failure");
}

#[tokio::test]
async fn test_create_delivery_without_pairing_is_not_found() {
    let mut repo = MockRepo::new();
    repo.expect_insert_delivery()
        .withf(|d| {
            d.product_id == ProductId(1)
                && d.provider_id == ProviderId(5)
                && d.delivery_date == NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        })
        .times(1)
        .returning(|_| Ok(0));

    let body = json!({
        "product_id": 1,
        "provider_id": 5,
        "delivery_date": "2024-06-01",
        "amount": 50
    });
    let (status, _) = send(
        router(repo),
        json_request(Method::POST, "/api/v1/delivery", body),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_delivery_accepts_legacy_query_names() {
    let mut repo = MockRepo::new();
    repo.expect_delete_delivery()
        .with(eq(ProductId(4)), eq(ProviderId(2)))
        .times(2)
        .returning(|_, _| Ok(1));
    let app = router(repo);

    let (status, _) = send(
        app.clone(),
        delete("/api/v1/delivery?product_id=4&provider_id=2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app, delete("/api/v1/delivery?productId=4&providerId=2")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_client_by_path() {
    let mut repo = MockRepo::new();
    repo.expect_update_client()
        .withf(|id, c| *id == ClientId(8) && c.phone == "3312345678")
        .times(1)
        .returning(|_, _| Ok(1));

    let body = json!({"name": "Juan", "address": "Calle 1", "phone": "3312345678"});
    let (status, _) = send(
        router(repo),
        json_request(Method::PUT, "/api/v1/client/8", body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_numeric_client_id_is_bad_request() {
    let (status, _) = send(router(MockRepo::new()), delete("/api/v1/client/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_brands_and_categories() {
    let mut repo = MockRepo::new();
    repo.expect_list_brands()
        .returning(|| Ok(vec!["ACME Corp".to_string(), "Bosch".to_string()]));
    repo.expect_list_categories().returning(|| {
        Ok(vec![Category {
            category_id: CategoryId(1),
            name: "Brakes".to_string(),
        }])
    });
    let app = router(repo);

    let (_, body) = send(app.clone(), get("/api/v1/brand")).await;
    assert_eq!(body, json!({"brands": ["ACME Corp", "Bosch"], "error": false}));

    let (_, body) = send(app, get("/api/v1/category")).await;
    assert_eq!(body["categories"][0]["category_id"], 1);
}
