//! Task intake, candidate screening, and operator-facing assignment
//! diagnostics.
//!
//! The evaluator at the center of this module is a pure function over roster
//! and task snapshots; persistence and notification side effects live behind
//! the repository traits so the screening semantics stay testable in
//! isolation.

pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountStatus, TaskDraft, TaskId, TaskSnapshot, TaskStatus, WorkerId, WorkerProfile,
};
pub use evaluation::{
    AssignmentConfig, AssignmentEvaluation, AssignmentEvaluator, AssignmentOutcome, Candidate,
    CandidateDiagnostic, CandidateStatus,
};
pub use intake::{IntakeError, RawTaskDocument, RawWorkerDocument};
pub use repository::{
    NotificationError, NotificationPublisher, RepositoryError, TaskOpportunityAlert, TaskRecord,
    TaskRepository, TaskStatusView, WorkerRepository,
};
pub use router::assignment_router;
pub use service::{
    AssignmentDecision, AssignmentMode, CreatedTask, TaskAssignmentService, TaskServiceError,
};
