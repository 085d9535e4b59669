//! Route handlers organized by resource

pub mod index;
pub mod health;
pub mod users;
pub mod exercises;
