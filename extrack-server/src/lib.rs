//! extrack-server: exercise tracker HTTP service
//!
//! Registers users, records timed exercises per user, and serves filtered
//! exercise logs over a small JSON API backed by SQLite.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
