use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::domain::{TaskDraft, TaskId, TaskStatus};
use super::evaluation::{
    AssignmentConfig, AssignmentEvaluation, AssignmentEvaluator, Candidate,
};
use super::repository::{
    NotificationPublisher, RepositoryError, TaskOpportunityAlert, TaskRecord, TaskRepository,
    WorkerRepository,
};

/// Operator's choice for how a drafted task should be published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    AutoAssign,
    Broadcast,
    Manual,
}

/// Persistence decision resolved from an evaluation and the operator's mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AssignmentDecision {
    Assigned { worker: Candidate },
    Broadcast { candidates: Vec<Candidate> },
    OpenUnassigned,
}

impl AssignmentDecision {
    pub fn summary(&self) -> String {
        match self {
            AssignmentDecision::Assigned { worker } => {
                format!(
                    "assigned to {} ({:.0}% match)",
                    worker.full_name, worker.match_percentage
                )
            }
            AssignmentDecision::Broadcast { candidates } => {
                format!("broadcast to {} candidate(s)", candidates.len())
            }
            AssignmentDecision::OpenUnassigned => "published unassigned".to_string(),
        }
    }
}

/// Result of a task-creation pass: the stored record plus everything the
/// operator needs to understand what happened.
#[derive(Debug)]
pub struct CreatedTask {
    pub record: TaskRecord,
    pub evaluation: AssignmentEvaluation,
    pub decision: AssignmentDecision,
    /// Set when the task was stored but the alert could not be dispatched.
    pub notification_failure: Option<String>,
}

/// Error raised by the assignment service.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Service composing the repositories, notifier, and screening engine.
pub struct TaskAssignmentService<W, T, N> {
    workers: Arc<W>,
    tasks: Arc<T>,
    notifier: Arc<N>,
    evaluator: Arc<AssignmentEvaluator>,
}

static TASK_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    let id = TASK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TaskId(format!("task-{id:06}"))
}

impl<W, T, N> TaskAssignmentService<W, T, N>
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(workers: Arc<W>, tasks: Arc<T>, notifier: Arc<N>, config: AssignmentConfig) -> Self {
        Self {
            workers,
            tasks,
            notifier,
            evaluator: Arc::new(AssignmentEvaluator::new(config)),
        }
    }

    /// Evaluate a draft against current snapshots without persisting
    /// anything, for the operator confirmation dialog.
    pub fn preview(&self, draft: &TaskDraft) -> Result<AssignmentEvaluation, TaskServiceError> {
        let roster = self.workers.list()?;
        let stored = self.tasks.list()?;
        let snapshots: Vec<_> = stored.iter().map(TaskRecord::snapshot).collect();

        let evaluation = self.evaluator.evaluate(draft, &roster, &snapshots);
        debug!(
            candidates = evaluation.candidates.len(),
            outcome = %evaluation.outcome.summary(),
            "assignment preview computed"
        );
        Ok(evaluation)
    }

    /// Evaluate, persist the task per the operator's mode, and dispatch the
    /// matching alert. A failed alert never rolls back the stored task; it
    /// is reported on the result instead.
    pub fn create_task(
        &self,
        draft: TaskDraft,
        mode: AssignmentMode,
    ) -> Result<CreatedTask, TaskServiceError> {
        let evaluation = self.preview(&draft)?;
        let decision = resolve_decision(mode, &evaluation);

        let (status, assigned_to, candidate_worker_ids) = match &decision {
            AssignmentDecision::Assigned { worker } => (
                TaskStatus::InProgress,
                Some(worker.worker_id.clone()),
                Vec::new(),
            ),
            AssignmentDecision::Broadcast { candidates } => (
                TaskStatus::Available,
                None,
                candidates
                    .iter()
                    .map(|candidate| candidate.worker_id.clone())
                    .collect(),
            ),
            AssignmentDecision::OpenUnassigned => (TaskStatus::Available, None, Vec::new()),
        };

        let record = TaskRecord {
            id: next_task_id(),
            title: draft.title,
            detail: draft.detail,
            skills: draft.skills,
            payout: draft.payout,
            status,
            assigned_to,
            candidate_worker_ids,
            created_at: Utc::now(),
        };

        let stored = self.tasks.insert(record)?;
        info!(task_id = %stored.id.0, decision = %decision.summary(), "task stored");

        let notification_failure = match alert_for(&stored, &decision) {
            Some(alert) => match self.notifier.publish(alert) {
                Ok(()) => None,
                Err(err) => {
                    warn!(task_id = %stored.id.0, error = %err, "task alert failed to dispatch");
                    Some(err.to_string())
                }
            },
            None => None,
        };

        Ok(CreatedTask {
            record: stored,
            evaluation,
            decision,
            notification_failure,
        })
    }

    pub fn get(&self, task_id: &TaskId) -> Result<TaskRecord, TaskServiceError> {
        let record = self
            .tasks
            .fetch(task_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Map the operator's mode onto the evaluation. Modes that need candidates
/// degrade to an open unassigned task when none exist.
fn resolve_decision(mode: AssignmentMode, evaluation: &AssignmentEvaluation) -> AssignmentDecision {
    match mode {
        AssignmentMode::AutoAssign => match &evaluation.top_candidate {
            Some(worker) => AssignmentDecision::Assigned {
                worker: worker.clone(),
            },
            None => AssignmentDecision::OpenUnassigned,
        },
        AssignmentMode::Broadcast => {
            if evaluation.candidates.is_empty() {
                AssignmentDecision::OpenUnassigned
            } else {
                AssignmentDecision::Broadcast {
                    candidates: evaluation.candidates.clone(),
                }
            }
        }
        AssignmentMode::Manual => AssignmentDecision::OpenUnassigned,
    }
}

fn alert_for(record: &TaskRecord, decision: &AssignmentDecision) -> Option<TaskOpportunityAlert> {
    match decision {
        AssignmentDecision::Assigned { worker } => {
            let mut details = BTreeMap::new();
            details.insert("task".to_string(), record.title.clone());
            details.insert(
                "match".to_string(),
                format!("{:.0}%", worker.match_percentage),
            );
            Some(TaskOpportunityAlert {
                template: "task_assigned".to_string(),
                task_id: record.id.clone(),
                recipients: vec![worker.email.clone()],
                details,
            })
        }
        AssignmentDecision::Broadcast { candidates } => {
            let mut details = BTreeMap::new();
            details.insert("task".to_string(), record.title.clone());
            details.insert("candidates".to_string(), candidates.len().to_string());
            Some(TaskOpportunityAlert {
                template: "task_opportunity".to_string(),
                task_id: record.id.clone(),
                recipients: candidates
                    .iter()
                    .map(|candidate| candidate.email.clone())
                    .collect(),
                details,
            })
        }
        AssignmentDecision::OpenUnassigned => None,
    }
}
