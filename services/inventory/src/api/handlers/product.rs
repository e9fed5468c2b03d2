//! 产品处理器

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::Value;
use tracing::info;

use super::IdQuery;
use crate::api::error::ApiResult;
use crate::api::response::{MessageResponse, ensure_found, list_response};
use crate::api::routes::AppState;
use crate::domain::{ProductDto, ProductId, Validate};

pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let products = state.repo.list_products().await?;
    Ok(list_response("products", products))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(product) = payload?;
    product.validate()?;

    let id = state.repo.insert_product(&product).await?;
    info!(product_id = %id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Product created", id.0)),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;
    let Json(product) = payload?;
    product.validate()?;

    let rows = state.repo.update_product(ProductId(id), &product).await?;
    ensure_found(rows, format!("product {}", id))?;

    Ok(Json(MessageResponse::ok("Product updated")))
}

pub async fn delete_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;

    let rows = state.repo.delete_product(ProductId(id)).await?;
    ensure_found(rows, format!("product {}", id))?;

    Ok(Json(MessageResponse::ok("Product deleted")))
}
