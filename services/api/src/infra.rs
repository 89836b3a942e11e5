use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use workmatch::config::AssignmentSettings;
use workmatch::workflows::assignment::{
    AccountStatus, AssignmentConfig, NotificationError, NotificationPublisher, RepositoryError,
    TaskId, TaskOpportunityAlert, TaskRecord, TaskRepository, WorkerId, WorkerProfile,
    WorkerRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryWorkerRepository {
    workers: Arc<Mutex<Vec<WorkerProfile>>>,
}

impl InMemoryWorkerRepository {
    pub(crate) fn seeded(workers: Vec<WorkerProfile>) -> Self {
        Self {
            workers: Arc::new(Mutex::new(workers)),
        }
    }

    /// Merge imported profiles into the roster, replacing any worker already
    /// present under the same id.
    pub(crate) fn upsert_all(&self, incoming: Vec<WorkerProfile>) {
        let mut guard = self.workers.lock().expect("roster mutex poisoned");
        for profile in incoming {
            match guard.iter_mut().find(|existing| existing.id == profile.id) {
                Some(existing) => *existing = profile,
                None => guard.push(profile),
            }
        }
    }
}

impl WorkerRepository for InMemoryWorkerRepository {
    fn list(&self) -> Result<Vec<WorkerProfile>, RepositoryError> {
        Ok(self.workers.lock().expect("roster mutex poisoned").clone())
    }

    fn fetch(&self, id: &WorkerId) -> Result<Option<WorkerProfile>, RepositoryError> {
        let guard = self.workers.lock().expect("roster mutex poisoned");
        Ok(guard.iter().find(|profile| &profile.id == id).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryTaskRepository {
    records: Arc<Mutex<HashMap<TaskId, TaskRecord>>>,
}

impl TaskRepository for InMemoryTaskRepository {
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
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
pub(crate) struct InMemoryNotificationPublisher {
    events: Arc<Mutex<Vec<TaskOpportunityAlert>>>,
}

impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, alert: TaskOpportunityAlert) -> Result<(), NotificationError> {
        let mut guard = self.events.lock().expect("alert mutex poisoned");
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<TaskOpportunityAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

pub(crate) fn assignment_config(settings: &AssignmentSettings) -> AssignmentConfig {
    AssignmentConfig {
        workload_limit: settings.workload_limit,
        skill_threshold_percent: settings.skill_threshold_percent,
    }
}

/// Roster used until an operator imports the real worker directory.
pub(crate) fn seed_roster() -> Vec<WorkerProfile> {
    vec![
        seed_worker(
            "w-priya",
            "Priya Shah",
            "priya@workmatch.dev",
            &["React", "Node.js", "TypeScript"],
            AccountStatus::Active,
            (2025, 2, 3),
        ),
        seed_worker(
            "w-marco",
            "Marco Silva",
            "marco@workmatch.dev",
            &["Python", "Django", "PostgreSQL"],
            AccountStatus::Active,
            (2025, 3, 18),
        ),
        seed_worker(
            "w-lena",
            "Lena Fischer",
            "lena@workmatch.dev",
            &["React", "Figma"],
            AccountStatus::Suspended,
            (2024, 11, 7),
        ),
        seed_worker(
            "w-tomas",
            "Tomás Rivera",
            "tomas@workmatch.dev",
            &["Java", "Spring"],
            AccountStatus::Active,
            (2025, 5, 29),
        ),
        seed_worker(
            "w-aisha",
            "Aisha Bello",
            "aisha@workmatch.dev",
            &["Python", "Flask"],
            AccountStatus::Pending,
            (2025, 7, 12),
        ),
    ]
}

fn seed_worker(
    id: &str,
    name: &str,
    email: &str,
    skills: &[&str],
    status: AccountStatus,
    joined: (i32, u32, u32),
) -> WorkerProfile {
    WorkerProfile {
        id: WorkerId(id.to_string()),
        full_name: name.to_string(),
        email: email.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        account_status: status,
        joined_on: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2),
    }
}
