//! Workload simulation handlers.

use crate::{
    models::{CpuRunResponse, MemoryGrowthResponse, TaskBatchResponse},
    state::AppState,
    Result,
};
use axum::{extract::State, Json};

/// `GET /thread-tasks`
pub async fn run_thread_tasks(State(state): State<AppState>) -> Result<Json<TaskBatchResponse>> {
    let batch = state.workload_service.parallel_work().await?;
    Ok(Json(batch.into()))
}

/// `GET /normal-tasks`
///
/// Sleeps on the request task itself, stalling this runtime worker.
pub async fn run_normal_tasks(State(state): State<AppState>) -> Json<TaskBatchResponse> {
    Json(state.workload_service.sequential_work().into())
}

/// `GET /memory-leak`
pub async fn simulate_memory_leak(State(state): State<AppState>) -> Json<MemoryGrowthResponse> {
    Json(state.workload_service.simulate_memory_growth().await.into())
}

/// `GET /cpu-intensive`
pub async fn cpu_intensive_task(State(state): State<AppState>) -> Json<CpuRunResponse> {
    Json(state.workload_service.cpu_intensive_task().into())
}
