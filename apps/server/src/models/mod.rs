//! Domain models

pub mod item;
pub mod workload;

pub use item::{Item, ItemId};
pub use workload::{
    format_seconds, CpuRun, CpuRunResponse, MemoryGrowth, MemoryGrowthResponse, TaskBatch,
    TaskBatchResponse, TaskOutcome,
};
