use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use site_audit::audit::{
    audit_router, AuditRouterState, AuditService, PaymentLedger, ReportRepository,
};

use crate::infra::AppState;

/// Admin state: the service plus the configured history cap.
pub(crate) struct AdminState<R, P> {
    pub(crate) service: Arc<AuditService<R, P>>,
    pub(crate) scan_history_limit: usize,
}

impl<R, P> Clone for AdminState<R, P> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            scan_history_limit: self.scan_history_limit,
        }
    }
}

pub(crate) fn with_audit_routes<R, P>(
    router_state: AuditRouterState<R, P>,
    scan_history_limit: usize,
) -> axum::Router
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    let admin = AdminState {
        service: Arc::clone(&router_state.service),
        scan_history_limit,
    };

    audit_router(router_state)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .merge(
            axum::Router::new()
                .route(
                    "/api/v1/admin/scans",
                    axum::routing::get(recent_scans_endpoint::<R, P>),
                )
                .with_state(admin),
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

pub(crate) async fn recent_scans_endpoint<R, P>(
    State(state): State<AdminState<R, P>>,
) -> impl IntoResponse
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    match state.service.recent_scans(state.scan_history_limit) {
        Ok(entries) => (StatusCode::OK, Json(json!({ "scans": entries }))).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": error.to_string() })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use site_audit::audit::{DocumentFetcher, FetchError, FetchedDocument};
    use tower::util::ServiceExt;

    use super::*;
    use crate::infra::{InMemoryPaymentLedger, InMemoryReportRepository};

    struct CannedFetcher;

    #[async_trait]
    impl DocumentFetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
            Ok(FetchedDocument {
                final_url: url.to_string(),
                html: "<html lang=\"en\"><head><title>Test Spot</title></head><body><h1>Test Spot</h1></body></html>".to_string(),
            })
        }
    }

    fn app() -> axum::Router {
        let service = AuditService::new(
            Arc::new(InMemoryReportRepository::default()),
            Arc::new(InMemoryPaymentLedger::default()),
        )
        .expect("registry is consistent");
        with_audit_routes(
            AuditRouterState {
                service: Arc::new(service),
                fetcher: Arc::new(CannedFetcher),
            },
            100,
        )
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = app()
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn scan_then_admin_listing_shows_the_report() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/scan")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url":"https://testspot.example"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get("/api/v1/admin/scans")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["scans"].as_array().unwrap().len(), 1);
        assert_eq!(body["scans"][0]["url"], "https://testspot.example");
    }
}
