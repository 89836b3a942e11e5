use serde::{Deserialize, Serialize};

use super::domain::{
    AccountStatus, TaskId, TaskSnapshot, TaskStatus, WorkerId, WorkerProfile,
};

/// Validation errors raised at the storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("document is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("unrecognized account status `{0}`")]
    UnknownAccountStatus(String),
    #[error("unrecognized task status `{0}`")]
    UnknownTaskStatus(String),
}

/// Worker document as stored, with every field optional. The validation
/// step below is the only place these loose shapes are allowed to exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWorkerDocument {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<Vec<String>>,
    pub account_status: Option<String>,
    pub joined_on: Option<chrono::NaiveDate>,
}

/// Task document as stored, with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTaskDocument {
    pub id: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

/// Convert a loose worker document into a typed profile.
///
/// An absent skill list is treated as an empty set rather than an error; a
/// missing display name falls back to the id, and a missing status is read
/// as `pending` so the account stays unassignable until reviewed.
pub fn worker_from_document(document: RawWorkerDocument) -> Result<WorkerProfile, IntakeError> {
    let id = non_blank(document.id).ok_or(IntakeError::MissingField("id"))?;
    let email = non_blank(document.email).ok_or(IntakeError::MissingField("email"))?;
    let full_name = non_blank(document.full_name).unwrap_or_else(|| id.clone());

    let skills = document
        .skills
        .unwrap_or_default()
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect();

    let account_status = match document.account_status {
        Some(raw) => parse_account_status(&raw)?,
        None => AccountStatus::Pending,
    };

    Ok(WorkerProfile {
        id: WorkerId(id),
        full_name,
        email,
        skills,
        account_status,
        joined_on: document.joined_on,
    })
}

/// Convert a loose task document into a workload snapshot.
///
/// A missing status reads as `available`, which never counts toward a
/// worker's open-assignment total.
pub fn task_from_document(document: RawTaskDocument) -> Result<TaskSnapshot, IntakeError> {
    let id = non_blank(document.id).ok_or(IntakeError::MissingField("id"))?;
    let assigned_to = non_blank(document.assigned_to).map(WorkerId);
    let status = match document.status {
        Some(raw) => parse_task_status(&raw)?,
        None => TaskStatus::Available,
    };

    Ok(TaskSnapshot {
        id: TaskId(id),
        assigned_to,
        status,
    })
}

pub fn parse_account_status(raw: &str) -> Result<AccountStatus, IntakeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(AccountStatus::Pending),
        "active" => Ok(AccountStatus::Active),
        "suspended" => Ok(AccountStatus::Suspended),
        "terminated" => Ok(AccountStatus::Terminated),
        _ => Err(IntakeError::UnknownAccountStatus(raw.to_string())),
    }
}

pub fn parse_task_status(raw: &str) -> Result<TaskStatus, IntakeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "available" => Ok(TaskStatus::Available),
        "assigned" => Ok(TaskStatus::Assigned),
        "in-progress" | "in_progress" => Ok(TaskStatus::InProgress),
        "submitted" => Ok(TaskStatus::Submitted),
        "completed" => Ok(TaskStatus::Completed),
        "rejected" => Ok(TaskStatus::Rejected),
        _ => Err(IntakeError::UnknownTaskStatus(raw.to_string())),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
