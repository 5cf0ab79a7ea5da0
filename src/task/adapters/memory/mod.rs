//! In-memory adapter implementations for testing.

mod application;
mod task;

pub use application::InMemoryApplicationDirectory;
pub use task::InMemoryTaskRepository;
