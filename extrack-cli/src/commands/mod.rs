//! Command implementations for extrack CLI

pub mod serve;

pub use serve::run_serve;
