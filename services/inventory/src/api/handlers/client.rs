//! 客户处理器

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::Value;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::response::{MessageResponse, ensure_found, list_response};
use crate::api::routes::AppState;
use crate::domain::{ClientDto, ClientId, Validate};

pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let clients = state.repo.list_clients().await?;
    Ok(list_response("clients", clients))
}

pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientDto>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(client) = payload?;
    client.validate()?;

    let id = state.repo.insert_client(&client).await?;
    info!(client_id = %id, "Client registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("Client registered", id.0)),
    ))
}

pub async fn update_client(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ClientDto>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;
    let Json(client) = payload?;
    client.validate()?;

    let rows = state.repo.update_client(ClientId(id), &client).await?;
    ensure_found(rows, format!("client {}", id))?;

    Ok(Json(MessageResponse::ok("Client updated")))
}

pub async fn delete_client(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = path?;

    let rows = state.repo.delete_client(ClientId(id)).await?;
    ensure_found(rows, format!("client {}", id))?;

    Ok(Json(MessageResponse::ok("Client deleted")))
}
