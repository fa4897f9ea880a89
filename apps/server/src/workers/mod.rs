//! Background execution primitives

pub mod pool;

pub use pool::WorkerPool;
