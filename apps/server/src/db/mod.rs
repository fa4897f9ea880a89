//! Item storage layer

pub mod memory;
pub mod traits;

pub use memory::InMemoryItemStore;
pub use traits::ItemStore;
