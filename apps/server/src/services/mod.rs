//! Business logic layer
//!
//! Services sit between the HTTP handlers and the storage layer and own the
//! process-wide state each operation works on.

pub mod items;
pub mod workload;

pub use items::ItemService;
pub use workload::WorkloadService;
