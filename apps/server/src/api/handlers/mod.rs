//! HTTP request handlers

pub mod items;
pub mod system;
pub mod workload;
