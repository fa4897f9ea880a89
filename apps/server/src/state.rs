//! Shared application state

use crate::{
    config::Config,
    db::{InMemoryItemStore, ItemStore},
    services::{ItemService, WorkloadService},
    Result,
};
use std::sync::Arc;

/// Shared application state passed to all handlers
///
/// Created once at startup; the item collection, growth buffer and worker pool
/// live exactly as long as the last clone of this state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub item_service: Arc<ItemService>,
    pub workload_service: Arc<WorkloadService>,
}

impl AppState {
    /// Initialize the application state with an empty in-memory store
    pub fn new(config: Config) -> Result<Self> {
        Self::with_store(config, Arc::new(InMemoryItemStore::new()))
    }

    pub fn with_store(config: Config, store: Arc<dyn ItemStore>) -> Result<Self> {
        tracing::info!("Initializing application state...");

        config.validate().map_err(crate::Error::Config)?;
        let config_arc = Arc::new(config);

        let item_service = Arc::new(ItemService::new(store));
        let workload_service = Arc::new(WorkloadService::new(config_arc.workload.clone()));

        tracing::info!(
            pool_size = workload_service.pool().size(),
            "Application state initialized successfully"
        );

        Ok(Self {
            config: config_arc,
            item_service,
            workload_service,
        })
    }
}
