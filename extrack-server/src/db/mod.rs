//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One SqlitePool, opened at startup and closed at shutdown
//! - Rely on the UNIQUE constraint for usernames, no check-then-insert
//! - Exercise ownership is checked by lookup, not a foreign key

pub mod pool;
pub mod repos;

pub use pool::{ensure_schema, open_memory_pool, open_pool};
pub use repos::*;
