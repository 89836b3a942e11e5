use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::assignment::domain::AccountStatus;
use crate::workflows::assignment::evaluation::AssignmentConfig;
use crate::workflows::assignment::router::{
    assignment_router, create_task_handler, CreateTaskRequest,
};
use crate::workflows::assignment::service::{AssignmentMode, TaskAssignmentService};

fn demo_roster() -> Vec<crate::workflows::assignment::domain::WorkerProfile> {
    vec![
        worker("ana", "Ana Ruiz", &["Python"], AccountStatus::Active),
        worker("bo", "Bo Lindgren", &["Python"], AccountStatus::Suspended),
        worker("cam", "Cam Ortiz", &["Go"], AccountStatus::Active),
    ]
}

#[tokio::test]
async fn preview_route_reports_every_worker() {
    let (service, _, _) = build_service(demo_roster());
    let router = assignment_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/tasks/preview")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({
                        "title": "Scripted ETL",
                        "skills": ["Python"],
                    }))
                    .expect("request serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let diagnostics = payload
        .get("diagnostics")
        .and_then(serde_json::Value::as_array)
        .expect("diagnostics array");
    assert_eq!(diagnostics.len(), 3);
    assert!(payload
        .get("summary")
        .and_then(serde_json::Value::as_str)
        .expect("summary string")
        .contains("eligible candidate"));
    assert!(!payload
        .get("trace")
        .and_then(serde_json::Value::as_array)
        .expect("trace array")
        .is_empty());
}

#[tokio::test]
async fn create_route_stores_and_reports_the_decision() {
    let (service, _, _) = build_service(demo_roster());
    let router = assignment_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/tasks")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&json!({
                        "title": "Scripted ETL",
                        "skills": ["Python"],
                        "mode": "auto_assign",
                    }))
                    .expect("request serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/task/status").and_then(serde_json::Value::as_str),
        Some("in-progress")
    );
    assert!(payload
        .get("decision_summary")
        .and_then(serde_json::Value::as_str)
        .expect("decision summary")
        .contains("assigned to Ana Ruiz"));
}

#[tokio::test]
async fn blank_title_is_unprocessable() {
    let (service, tasks, _) = build_service(demo_roster());

    let response = create_task_handler::<
        MemoryWorkerRepository,
        MemoryTaskRepository,
        MemoryNotifier,
    >(
        State(Arc::new(service)),
        axum::Json(CreateTaskRequest {
            title: "   ".to_string(),
            detail: String::new(),
            skills: vec!["Python".to_string()],
            payout: 0,
            mode: AssignmentMode::AutoAssign,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(tasks.records.lock().expect("task mutex poisoned").is_empty());
}

#[tokio::test]
async fn unknown_task_returns_not_found() {
    let (service, _, _) = build_service(demo_roster());
    let router = assignment_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/tasks/task-999999")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repository_outage_maps_to_internal_error() {
    let worker_repo = Arc::new(MemoryWorkerRepository::with_workers(demo_roster()));
    let service = Arc::new(TaskAssignmentService::new(
        worker_repo,
        Arc::new(UnavailableTaskRepository),
        Arc::new(MemoryNotifier::default()),
        AssignmentConfig::default(),
    ));

    let response = create_task_handler::<
        MemoryWorkerRepository,
        UnavailableTaskRepository,
        MemoryNotifier,
    >(
        State(service),
        axum::Json(CreateTaskRequest {
            title: "Scripted ETL".to_string(),
            detail: String::new(),
            skills: vec!["Python".to_string()],
            payout: 0,
            mode: AssignmentMode::AutoAssign,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
