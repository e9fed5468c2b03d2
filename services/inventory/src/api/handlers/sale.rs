//! 销售处理器

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
use crate::domain::{SaleDto, SaleId, Validate};

pub async fn list_sales(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let sales = state.repo.list_sales().await?;
    Ok(list_response("sales", sales))
}

pub async fn create_sale(
    State(state): State<AppState>,
    payload: Result<Json<SaleDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(sale) = payload?;
    sale.validate()?;

    let id = state.repo.insert_sale(&sale).await?;
    info!(sale_id = %id, "Sale registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Sale registered", id.0)),
    ))
}

pub async fn update_sale(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<SaleDto>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;
    let Json(sale) = payload?;
    sale.validate()?;

    let rows = state.repo.update_sale(SaleId(id), &sale).await?;
    ensure_found(rows, format!("sale {}", id))?;

    Ok(Json(MessageResponse::ok("Sale updated")))
}

pub async fn delete_sale(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;

    let rows = state.repo.delete_sale(SaleId(id)).await?;
    ensure_found(rows, format!("sale {}", id))?;

    Ok(Json(MessageResponse::ok("Sale deleted")))
}
