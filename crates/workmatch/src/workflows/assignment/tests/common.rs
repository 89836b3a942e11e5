use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assignment::domain::{
    AccountStatus, TaskDraft, TaskId, TaskSnapshot, TaskStatus, WorkerId, WorkerProfile,
};
use crate::workflows::assignment::evaluation::{AssignmentConfig, AssignmentEvaluator};
use crate::workflows::assignment::repository::{
    NotificationError, NotificationPublisher, RepositoryError, TaskOpportunityAlert, TaskRecord,
    TaskRepository, WorkerRepository,
};
use crate::workflows::assignment::service::TaskAssignmentService;

pub(super) fn worker(
    id: &str,
    name: &str,
    skills: &[&str],
    status: AccountStatus,
) -> WorkerProfile {
    WorkerProfile {
        id: WorkerId(id.to_string()),
        full_name: name.to_string(),
        email: format!("{id}@workmatch.dev"),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        account_status: status,
        joined_on: None,
    }
}

pub(super) fn stored_task(id: &str, assigned_to: Option<&str>, status: TaskStatus) -> TaskSnapshot {
    TaskSnapshot {
        id: TaskId(id.to_string()),
        assigned_to: assigned_to.map(|worker| WorkerId(worker.to_string())),
        status,
    }
}

pub(super) fn draft(title: &str, skills: &[&str]) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        detail: String::new(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        payout: 250,
    }
}

pub(super) fn evaluator() -> AssignmentEvaluator {
    AssignmentEvaluator::new(AssignmentConfig::default())
}

pub(super) fn evaluator_with(workload_limit: u32, skill_threshold_percent: f64) -> AssignmentEvaluator {
    AssignmentEvaluator::new(AssignmentConfig {
        workload_limit,
        skill_threshold_percent,
    })
}

#[derive(Default, Clone)]
pub(super) struct MemoryWorkerRepository {
    workers: Arc<Mutex<Vec<WorkerProfile>>>,
}

impl MemoryWorkerRepository {
    pub(super) fn with_workers(workers: Vec<WorkerProfile>) -> Self {
        Self {
            workers: Arc::new(Mutex::new(workers)),
        }
    }
}

impl WorkerRepository for MemoryWorkerRepository {
    fn list(&self) -> Result<Vec<WorkerProfile>, RepositoryError> {
        Ok(self.workers.lock().expect("roster mutex poisoned").clone())
    }

    fn fetch(&self, id: &WorkerId) -> Result<Option<WorkerProfile>, RepositoryError> {
        let guard = self.workers.lock().expect("roster mutex poisoned");
        Ok(guard.iter().find(|profile| &profile.id == id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryTaskRepository {
    pub(super) records: Arc<Mutex<HashMap<TaskId, TaskRecord>>>,
}

impl TaskRepository for MemoryTaskRepository {
    fn insert(&self, record: TaskRecord) -> Result<TaskRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("task mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: TaskRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("task mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &TaskId) -> Result<Option<TaskRecord>, RepositoryError> {
        let guard = self.records.lock().expect("task mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<TaskRecord>, RepositoryError> {
        let guard = self.records.lock().expect("task mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<TaskOpportunityAlert>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<TaskOpportunityAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifier {
    fn publish(&self, alert: TaskOpportunityAlert) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableTaskRepository;

impl TaskRepository for UnavailableTaskRepository {
    fn insert(&self, _record: TaskRecord) -> Result<TaskRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: TaskRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &TaskId) -> Result<Option<TaskRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<TaskRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct FailingNotifier;

impl NotificationPublisher for FailingNotifier {
    fn publish(&self, _alert: TaskOpportunityAlert) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp unavailable".to_string()))
    }
}

pub(super) type MemoryService =
    TaskAssignmentService<MemoryWorkerRepository, MemoryTaskRepository, MemoryNotifier>;

pub(super) fn build_service(
    workers: Vec<WorkerProfile>,
) -> (MemoryService, Arc<MemoryTaskRepository>, Arc<MemoryNotifier>) {
    let worker_repo = Arc::new(MemoryWorkerRepository::with_workers(workers));
    let task_repo = Arc::new(MemoryTaskRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = TaskAssignmentService::new(
        worker_repo,
        task_repo.clone(),
        notifier.clone(),
        AssignmentConfig::default(),
    );
    (service, task_repo, notifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
