use crate::infra::{AppState, InMemoryWorkerRepository};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use workmatch::error::AppError;
use workmatch::workflows::assignment::{
    assignment_router, NotificationPublisher, TaskAssignmentService, TaskRepository,
    WorkerRepository,
};
use workmatch::workflows::roster::{RosterImporter, SkippedRow};

pub(crate) fn with_assignment_routes<W, T, N>(
    service: Arc<TaskAssignmentService<W, T, N>>,
) -> axum::Router
where
    W: WorkerRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationPublisher + 'static,
{
    assignment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/workers/import",
            axum::routing::post(roster_import_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterImportResponse {
    pub(crate) imported: usize,
    pub(crate) skipped: Vec<SkippedRow>,
}

/// Accepts the legacy directory's CSV export as the request body and merges
/// the parsed profiles into the live roster.
pub(crate) async fn roster_import_endpoint(
    Extension(roster): Extension<Arc<InMemoryWorkerRepository>>,
    body: String,
) -> Result<Json<RosterImportResponse>, AppError> {
    let import = RosterImporter::from_reader(Cursor::new(body.into_bytes()))?;
    let imported = import.workers.len();
    roster.upsert_all(import.workers);

    Ok(Json(RosterImportResponse {
        imported,
        skipped: import.skipped,
    }))
}
