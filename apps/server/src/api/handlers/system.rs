use crate::{state::AppState, Result};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "안녕하세요! 아이템 서버입니다." }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub items: usize,
    pub growth_blocks: usize,
}

pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let response = HealthResponse {
        status: "ok",
        items: state.item_service.count().await?,
        growth_blocks: state.workload_service.growth_blocks().await,
    };
    Ok((StatusCode::OK, Json(response)))
}
