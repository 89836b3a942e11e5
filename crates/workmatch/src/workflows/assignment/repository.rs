use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{TaskId, TaskSnapshot, TaskStatus, WorkerId, WorkerProfile};

/// Stored task with its assignment metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub detail: String,
    pub skills: Vec<String>,
    pub payout: u32,
    pub status: TaskStatus,
    pub assigned_to: Option<WorkerId>,
    /// Populated only for broadcast tasks visible to several candidates.
    pub candidate_worker_ids: Vec<WorkerId>,
    pub created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Workload-counting view consumed by the evaluator.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            id: self.id.clone(),
            assigned_to: self.assigned_to.clone(),
            status: self.status,
        }
    }

    pub fn status_view(&self) -> TaskStatusView {
        TaskStatusView {
            task_id: self.id.clone(),
            title: self.title.clone(),
            status: self.status.label(),
            assigned_to: self.assigned_to.clone(),
            candidate_count: self.candidate_worker_ids.len(),
        }
    }
}

/// Roster access so the service module can be exercised in isolation.
pub trait WorkerRepository: Send + Sync {
    fn list(&self) -> Result<Vec<WorkerProfile>, RepositoryError>;
    fn fetch(&self, id: &WorkerId) -> Result<Option<WorkerProfile>, RepositoryError>;
}

/// Task storage abstraction.
pub trait TaskRepository: Send + Sync {
    fn insert(&self, record: TaskRecord) -> Result<TaskRecord, RepositoryError>;
    fn update(&self, record: TaskRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &TaskId) -> Result<Option<TaskRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<TaskRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound alert hooks (e.g., the SMTP adapter).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, alert: TaskOpportunityAlert) -> Result<(), NotificationError>;
}

/// Alert payload handed to the email boundary; recipients are worker
/// addresses resolved from the evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOpportunityAlert {
    pub template: String,
    pub task_id: TaskId,
    pub recipients: Vec<String>,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a stored task's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStatusView {
    pub task_id: TaskId,
    pub title: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<WorkerId>,
    pub candidate_count: usize,
}
