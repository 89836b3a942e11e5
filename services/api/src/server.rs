use crate::cli::ServeArgs;
use crate::infra::{
    assignment_config, seed_roster, AppState, InMemoryNotificationPublisher,
    InMemoryTaskRepository, InMemoryWorkerRepository,
};
use crate::routes::with_assignment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use workmatch::config::AppConfig;
use workmatch::error::AppError;
use workmatch::telemetry;
use workmatch::workflows::assignment::TaskAssignmentService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let roster = Arc::new(InMemoryWorkerRepository::seeded(seed_roster()));
    let tasks = Arc::new(InMemoryTaskRepository::default());
    let notifier = Arc::new(InMemoryNotificationPublisher::default());
    let assignment_service = Arc::new(TaskAssignmentService::new(
        roster.clone(),
        tasks,
        notifier,
        assignment_config(&config.assignment),
    ));

    let app = with_assignment_routes(assignment_service)
        .layer(Extension(app_state))
        .layer(Extension(roster))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "work-match assignment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
