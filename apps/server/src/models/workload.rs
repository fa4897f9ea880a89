//! Result and response types for the workload simulation endpoints.

use serde::Serialize;
use std::time::Duration;

/// Outcome of one simulated blocking task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub task_id: usize,
    pub result: String,
}

impl TaskOutcome {
    pub fn completed(task_id: usize) -> Self {
        Self {
            task_id,
            result: format!("작업 {task_id} 완료"),
        }
    }
}

/// A batch of simulated tasks together with the wall-clock time the batch took.
#[derive(Debug, Clone)]
pub struct TaskBatch {
    pub results: Vec<TaskOutcome>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskBatchResponse {
    pub results: Vec<TaskOutcome>,
    pub total_time: String,
}

impl From<TaskBatch> for TaskBatchResponse {
    fn from(batch: TaskBatch) -> Self {
        Self {
            results: batch.results,
            total_time: format_seconds(batch.elapsed),
        }
    }
}

/// State of the growth buffer after an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryGrowth {
    pub stored_items: usize,
    pub approximate_size_mb: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryGrowthResponse {
    pub message: &'static str,
    pub stored_items: usize,
    pub approximate_size_mb: String,
}

impl From<MemoryGrowth> for MemoryGrowthResponse {
    fn from(growth: MemoryGrowth) -> Self {
        Self {
            message: "메모리 누수 시뮬레이션 실행됨",
            stored_items: growth.stored_items,
            approximate_size_mb: format!("{}MB", growth.approximate_size_mb),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CpuRun {
    pub result: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize)]
pub struct CpuRunResponse {
    pub message: &'static str,
    pub execution_time: String,
    pub result: u64,
}

impl From<CpuRun> for CpuRunResponse {
    fn from(run: CpuRun) -> Self {
        Self {
            message: "CPU 집약적 작업 완료",
            execution_time: format_seconds(run.elapsed),
            result: run.result,
        }
    }
}

/// Seconds with two decimals followed by the `초` suffix, e.g. `"1.02초"`.
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}초", elapsed.as_secs_f64())
}
