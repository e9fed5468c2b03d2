//! 到货处理器

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::response::{MessageResponse, ensure_found, list_response};
use crate::api::routes::AppState;
use crate::domain::{DeliveryDto, ProductId, ProviderId, Validate};

/// `?product_id=&provider_id=`（兼容旧前端的 `productId` / `providerId`）
#[derive(Debug, Deserialize)]
pub struct DeliveryKeyQuery {
    #[serde(alias = "productId")]
    pub product_id: i32,
    #[serde(alias = "providerId")]
    pub provider_id: i32,
}

pub async fn list_deliveries(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let deliveries = state.repo.list_deliveries().await?;
    Ok(list_response("deliveries", deliveries))
}

/// 登记到货不新建记录，因此成功时返回 200 而不是 201
pub async fn create_delivery(
    State(state): State<AppState>,
    payload: Result<Json<DeliveryDto>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(delivery) = payload?;
    delivery.validate()?;

    let rows = state.repo.insert_delivery(&delivery).await?;
    ensure_found(
        rows,
        format!(
            "pairing of product {} and provider {}",
            delivery.product_id, delivery.provider_id
        ),
    )?;
    info!(
        product_id = %delivery.product_id,
        provider_id = %delivery.provider_id,
        "Delivery scheduled"
    );

    Ok(Json(MessageResponse::ok("Delivery registered")))
}

pub async fn delete_delivery(
    State(state): State<AppState>,
    query: Result<Query<DeliveryKeyQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(key) = query?;

    let rows = state
        .repo
        .delete_delivery(ProductId(key.product_id), ProviderId(key.provider_id))
        .await?;
    ensure_found(
        rows,
        format!(
            "delivery for product {} and provider {}",
            key.product_id, key.provider_id
        ),
    )?;

    Ok(Json(MessageResponse::ok("Delivery removed")))
}
