//! 分类与品牌处理器

use axum::{Json, extract::State};
use serde_json::Value;

use crate::api::error::ApiResult;
use crate::api::response::list_response;
use crate::api::routes::AppState;

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let categories = state.repo.list_categories().await?;
    Ok(list_response("categories", categories))
}

pub async fn list_brands(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let brands = state.repo.list_brands().await?;
    Ok(list_response("brands", brands))
}
