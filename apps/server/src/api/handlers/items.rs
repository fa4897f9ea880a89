//! Item CRUD handlers.

use crate::{
    models::{Item, ItemId},
    state::AppState,
    Result,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub async fn list_items(State(state): State<AppState>) -> Result<Response> {
    let items = state.item_service.list_items().await?;
    Ok((StatusCode::OK, Json(items)).into_response())
}

pub async fn get_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Response> {
    let Path(item_id) = path?;
    let item = state.item_service.get_item(item_id).await?;
    Ok((StatusCode::OK, Json(item)).into_response())
}

pub async fn create_item(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Item>, JsonRejection>,
) -> Result<Response> {
    let Json(item) = payload?;
    let item = state.item_service.create_item(item).await?;
    Ok((StatusCode::OK, Json(item)).into_response())
}

pub async fn update_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
    payload: std::result::Result<Json<Item>, JsonRejection>,
) -> Result<Response> {
    let Path(item_id) = path?;
    let Json(item) = payload?;
    let item = state.item_service.update_item(item_id, item).await?;
    Ok((StatusCode::OK, Json(item)).into_response())
}

pub async fn delete_item(
    State(state): State<AppState>,
    path: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Response> {
    let Path(item_id) = path?;
    state.item_service.delete_item(item_id).await?;
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Item deleted successfully" })),
    )
        .into_response())
}
