//! 供应商处理器

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
use crate::domain::{ProviderDto, ProviderId, Validate};

pub async fn list_providers(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let providers = state.repo.list_providers().await?;
    Ok(list_response("providers", providers))
}

pub async fn create_provider(
    State(state): State<AppState>,
    payload: Result<Json<ProviderDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(provider) = payload?;
    provider.validate()?;

    let id = state.repo.insert_provider(&provider).await?;
    info!(provider_id = %id, "Provider created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Provider created", id.0)),
    ))
}

pub async fn update_provider(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<ProviderDto>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;
    let Json(provider) = payload?;
    provider.validate()?;

    let rows = state.repo.update_provider(ProviderId(id), &provider).await?;
    ensure_found(rows, format!("provider {}", id))?;

    Ok(Json(MessageResponse::ok("Provider updated")))
}

pub async fn delete_provider(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(IdQuery { id }) = query?;

    let rows = state.repo.delete_provider(ProviderId(id)).await?;
    ensure_found(rows, format!("provider {}", id))?;

    Ok(Json(MessageResponse::ok("Provider deleted")))
}
