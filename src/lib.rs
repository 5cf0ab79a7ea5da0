//! Lynkdesk: task tracking for applications.
//!
//! Tasks (calls, emails, reviews) belong to an application and inherit its
//! tenant. This crate validates and stores new tasks, lists the open tasks
//! due today, and completes them, exposed over HTTP.
//!
//! # Architecture
//!
//! Lynkdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, ports, adapters, and services
//! - [`api`]: axum router over the task services
//! - [`config`]: Server configuration from the environment

pub mod api;
pub mod config;
pub mod task;
