//! Persistence adapters for the task module.
//!
//! - [`memory`]: thread-safe in-memory storage for tests and local runs
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM

pub mod memory;
pub mod postgres;
