use crate::cli::ServeArgs;
use crate::infra::{
    AppState, HttpDocumentFetcher, InMemoryPaymentLedger, InMemoryReportRepository,
};
use crate::routes::with_audit_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use site_audit::audit::{AuditRouterState, AuditService};
use site_audit::config::AppConfig;
use site_audit::error::AppError;
use site_audit::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let repository = Arc::new(InMemoryReportRepository::default());
    let payments = Arc::new(InMemoryPaymentLedger::default());
    let audit_service = Arc::new(AuditService::new(repository, payments)?);
    let router_state = AuditRouterState {
        service: audit_service,
        fetcher: Arc::new(HttpDocumentFetcher::new()),
    };

    let app = with_audit_routes(router_state, config.audit.scan_history_limit)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "site audit service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
