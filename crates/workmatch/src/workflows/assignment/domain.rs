use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for workers in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(pub String);

/// Identifier wrapper for stored tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

/// Lifecycle of a worker account. Only `Active` accounts may receive work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Pending,
    Active,
    Suspended,
    Terminated,
}

impl AccountStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
            AccountStatus::Terminated => "terminated",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

/// Lifecycle of a stored task, using the legacy wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Available,
    Assigned,
    InProgress,
    Submitted,
    Completed,
    Rejected,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TaskStatus::Available => "available",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Submitted => "submitted",
            TaskStatus::Completed => "completed",
            TaskStatus::Rejected => "rejected",
        }
    }

    /// Only open assignments occupy a worker's capacity; submitted and
    /// finished work does not.
    pub const fn counts_toward_workload(self) -> bool {
        matches!(self, TaskStatus::Assigned | TaskStatus::InProgress)
    }
}

/// Read-only roster snapshot consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    pub id: WorkerId,
    pub full_name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub account_status: AccountStatus,
    pub joined_on: Option<NaiveDate>,
}

/// Minimal stored-task view used for workload counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub assigned_to: Option<WorkerId>,
    pub status: TaskStatus,
}

/// The in-memory, not-yet-persisted task submitted for automatic matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub detail: String,
    /// Required skill labels, order preserved. Duplicates are kept and each
    /// token is matched independently.
    pub skills: Vec<String>,
    #[serde(default)]
    pub payout: u32,
}
