use crate::api::handlers::workload;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn workload_routes() -> Router<AppState> {
    Router::new()
        .route("/thread-tasks", get(workload::run_thread_tasks))
        .route("/normal-tasks", get(workload::run_normal_tasks))
        .route("/memory-leak", get(workload::simulate_memory_leak))
        .route("/cpu-intensive", get(workload::cpu_intensive_task))
}
