//! Fixed-size pool for blocking jobs.
//!
//! Jobs run on tokio's blocking thread pool, but at most `size` of them are in
//! flight at any moment. Submitting more jobs than workers queues the extra ones
//! until a permit frees up.

use crate::{Error, Result};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of workers currently idle.
    pub fn idle_workers(&self) -> usize {
        self.permits.available_permits()
    }

    /// Run every job on the pool and wait for all of them.
    ///
    /// Results are returned in submission order regardless of completion order.
    pub async fn run_all<F, T>(&self, jobs: Vec<F>) -> Result<Vec<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let handles: Vec<_> = jobs
            .into_iter()
            .map(|job| {
                let permits = self.permits.clone();
                tokio::spawn(async move {
                    let permit = permits.acquire_owned().await.map_err(|e| {
                        Error::Internal(format!("Failed to acquire worker: {}", e))
                    })?;
                    let output = tokio::task::spawn_blocking(move || {
                        let _permit = permit;
                        job()
                    })
                    .await?;
                    Ok::<T, Error>(output)
                })
            })
            .collect();

        let mut outputs = Vec::with_capacity(handles.len());
        for joined in join_all(handles).await {
            outputs.push(joined??);
        }
        Ok(outputs)
    }
}
