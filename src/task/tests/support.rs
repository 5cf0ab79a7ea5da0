//! Test doubles shared by task unit tests.

use crate::task::{
    domain::{Application, ApplicationId, Task, TaskId},
    ports::{
        ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult,
        TaskRepository, TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to 2026-03-14 15:00:00 UTC.
    pub fn afternoon() -> Self {
        Self(
            Utc.with_ymd_and_hms(2026, 3, 14, 15, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Application directory whose lookups always fail.
#[derive(Debug, Default)]
pub struct UnavailableApplicationDirectory;

#[async_trait]
impl ApplicationDirectory for UnavailableApplicationDirectory {
    async fn find_by_id(
        &self,
        _id: &ApplicationId,
    ) -> ApplicationDirectoryResult<Option<Application>> {
        Err(ApplicationDirectoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    }
}

/// Task repository whose every operation fails.
#[derive(Debug, Default)]
pub struct UnavailableTaskRepository;

fn unavailable() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection refused"))
}

#[async_trait]
impl TaskRepository for UnavailableTaskRepository {
    async fn insert(&self, _task: &Task) -> TaskRepositoryResult<Task> {
        Err(unavailable())
    }

    async fn update(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(unavailable())
    }

    async fn list_open_due_between(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        Err(unavailable())
    }
}
