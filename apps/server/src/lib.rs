//! Item service
//!
//! An axum HTTP service exposing CRUD over an in-memory item collection plus a
//! few diagnostic endpoints that simulate pool-parallel work, sequential
//! blocking work, unbounded memory growth and a CPU-bound loop.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod workers;

pub use error::{Error, Result};
