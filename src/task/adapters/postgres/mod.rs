//! `PostgreSQL` adapters for application lookup and task persistence.

mod application;
mod blocking;
mod models;
mod repository;
mod schema;

pub use application::PostgresApplicationDirectory;
pub use blocking::TaskPgPool;
pub use repository::PostgresTaskRepository;
