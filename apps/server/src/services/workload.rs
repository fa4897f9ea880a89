//! Workload simulation service
//!
//! Diagnostic operations that exercise the runtime in deliberately naive ways:
//! pool-parallel sleeps, sequential sleeps on the request task, an append-only
//! memory buffer and a trial-division prime loop.
//!
//! `sequential_work` and `cpu_intensive_task` block the calling runtime worker
//! for their whole duration. That head-of-line blocking is what they exist to
//! show, so they are not moved onto the blocking pool.

use crate::{
    config::WorkloadConfig,
    models::{CpuRun, MemoryGrowth, TaskBatch, TaskOutcome},
    workers::WorkerPool,
    Result,
};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

const FILL_BYTE: u8 = b'*';

pub struct WorkloadService {
    pool: WorkerPool,
    growth_buffer: Mutex<Vec<Box<[u8]>>>,
    config: WorkloadConfig,
}

impl WorkloadService {
    pub fn new(config: WorkloadConfig) -> Self {
        Self {
            pool: WorkerPool::new(config.pool_size),
            growth_buffer: Mutex::new(Vec::new()),
            config,
        }
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Dispatch `task_count` simulated tasks onto the worker pool and wait for all.
    pub async fn parallel_work(&self) -> Result<TaskBatch> {
        let duration = self.config.task_duration();
        let start = Instant::now();

        let jobs: Vec<_> = (0..self.config.task_count)
            .map(|task_id| move || simulated_task(task_id, duration))
            .collect();
        let results = self.pool.run_all(jobs).await?;

        let elapsed = start.elapsed();
        tracing::info!(
            tasks = results.len(),
            pool_size = self.pool.size(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Parallel tasks finished"
        );
        Ok(TaskBatch { results, elapsed })
    }

    /// Run the same simulated tasks one after another on the calling thread.
    pub fn sequential_work(&self) -> TaskBatch {
        let duration = self.config.task_duration();
        let start = Instant::now();

        let results: Vec<_> = (0..self.config.task_count)
            .map(|task_id| simulated_task(task_id, duration))
            .collect();

        let elapsed = start.elapsed();
        tracing::info!(
            tasks = results.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Sequential tasks finished"
        );
        TaskBatch { results, elapsed }
    }

    /// Append one `memory_block_mb` block to the growth buffer. Nothing is ever freed.
    pub async fn simulate_memory_growth(&self) -> MemoryGrowth {
        let block = vec![FILL_BYTE; self.config.memory_block_bytes()].into_boxed_slice();

        let stored_items = {
            let mut buffer = self.growth_buffer.lock().await;
            buffer.push(block);
            buffer.len()
        };

        let growth = MemoryGrowth {
            stored_items,
            approximate_size_mb: stored_items * self.config.memory_block_mb,
        };
        tracing::warn!(
            stored_items = growth.stored_items,
            approximate_size_mb = growth.approximate_size_mb,
            "Growth buffer extended"
        );
        growth
    }

    pub async fn growth_blocks(&self) -> usize {
        self.growth_buffer.lock().await.len()
    }

    /// Run the prime checksum loop up to `cpu_iterations` on the calling thread.
    pub fn cpu_intensive_task(&self) -> CpuRun {
        let start = Instant::now();
        let result = prime_checksum(self.config.cpu_iterations);
        let elapsed = start.elapsed();

        tracing::info!(
            iterations = self.config.cpu_iterations,
            result,
            elapsed_ms = elapsed.as_millis() as u64,
            "CPU-intensive task finished"
        );
        CpuRun { result, elapsed }
    }
}

/// Block the current thread for `duration`, then report completion.
pub fn simulated_task(task_id: usize, duration: Duration) -> TaskOutcome {
    std::thread::sleep(duration);
    TaskOutcome::completed(task_id)
}

/// Sum of every prime below `limit` plus `i² mod 1000` for every `i` below `limit`.
///
/// Primality is checked by trial division on purpose.
pub fn prime_checksum(limit: u64) -> u64 {
    let mut result = 0u64;
    for i in 0..limit {
        if i > 1 && is_prime_by_trial_division(i) {
            result += i;
        }
        let tail = i % 1000;
        result += tail * tail % 1000;
    }
    result
}

fn is_prime_by_trial_division(n: u64) -> bool {
    let bound = (n as f64).sqrt() as u64;
    (2..=bound).all(|d| n % d != 0)
}
