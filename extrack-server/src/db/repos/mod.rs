//! Repository implementations for database access
//!
//! Each repository borrows the pool and exposes one method per storage
//! operation. Handlers never write SQL.

pub mod users;
pub mod exercises;

pub use users::{DbError, User, UserRepo};
pub use exercises::{Exercise, ExerciseRepo, LogEntry, NewExercise};
