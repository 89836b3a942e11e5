use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{TaskDraft, TaskId};
use super::evaluation::AssignmentEvaluation;
use super::repository::{
    NotificationPublisher, RepositoryError, TaskRepository, WorkerRepository,
};
use super::service::{AssignmentMode, TaskAssignmentService, TaskServiceError};

/// Router builder exposing HTTP endpoints for task creation and the
/// pre-creation assignment preview.
pub fn assignment_router<W, T, N>(service: Arc<TaskAssignmentService<W, T, N>>) -> Router
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/tasks", post(create_task_handler::<W, T, N>))
        .route(
            "/api/v1/tasks/preview",
            post(preview_handler::<W, T, N>),
        )
        .route("/api/v1/tasks/:task_id", get(task_status_handler::<W, T, N>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTaskRequest {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) detail: String,
    pub(crate) skills: Vec<String>,
    #[serde(default)]
    pub(crate) payout: u32,
    #[serde(default = "default_mode")]
    pub(crate) mode: AssignmentMode,
}

fn default_mode() -> AssignmentMode {
    AssignmentMode::AutoAssign
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    pub(crate) title: String,
    pub(crate) skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewResponse {
    pub(crate) summary: String,
    #[serde(flatten)]
    pub(crate) evaluation: AssignmentEvaluation,
}

pub(crate) async fn preview_handler<W, T, N>(
    State(service): State<Arc<TaskAssignmentService<W, T, N>>>,
    axum::Json(request): axum::Json<PreviewRequest>,
) -> Response
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let draft = TaskDraft {
        title: request.title,
        detail: String::new(),
        skills: request.skills,
        payout: 0,
    };

    match service.preview(&draft) {
        Ok(evaluation) => {
            let view = PreviewResponse {
                summary: evaluation.outcome.summary(),
                evaluation,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn create_task_handler<W, T, N>(
    State(service): State<Arc<TaskAssignmentService<W, T, N>>>,
    axum::Json(request): axum::Json<CreateTaskRequest>,
) -> Response
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    if request.title.trim().is_empty() {
        let payload = json!({ "error": "task title is required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let draft = TaskDraft {
        title: request.title,
        detail: request.detail,
        skills: request.skills,
        payout: request.payout,
    };

    match service.create_task(draft, request.mode) {
        Ok(created) => {
            let payload = json!({
                "task": created.record.status_view(),
                "decision": created.decision,
                "decision_summary": created.decision.summary(),
                "outcome": created.evaluation.outcome.summary(),
                "notification_failure": created.notification_failure,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn task_status_handler<W, T, N>(
    State(service): State<Arc<TaskAssignmentService<W, T, N>>>,
    Path(task_id): Path<String>,
) -> Response
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let id = TaskId(task_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(TaskServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "task_id": id.0,
                "error": "task not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

fn service_error_response(err: TaskServiceError) -> Response {
    match err {
        TaskServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "task already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
