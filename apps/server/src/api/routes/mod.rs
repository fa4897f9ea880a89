pub mod items;
pub mod workload;

pub use items::item_routes;
pub use workload::workload_routes;
