use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::domain::ReportId;
use super::fetch::DocumentFetcher;
use super::repository::{PaymentLedger, ReportRepository};
use super::service::{AuditService, AuditServiceError};

/// Shared handler state: the audit service plus the outbound fetcher.
pub struct AuditRouterState<R, P> {
    pub service: Arc<AuditService<R, P>>,
    pub fetcher: Arc<dyn DocumentFetcher>,
}

impl<R, P> Clone for AuditRouterState<R, P> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

/// Router builder exposing HTTP endpoints for scanning and unlocking.
pub fn audit_router<R, P>(state: AuditRouterState<R, P>) -> Router
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    Router::new()
        .route("/api/v1/scan", post(scan_handler::<R, P>))
        .route("/api/v1/payments", post(payment_handler::<R, P>))
        .route("/api/v1/unlock", post(unlock_handler::<R, P>))
        .route("/api/v1/reports/:report_id", get(report_handler::<R, P>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScanRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentRequest {
    pub report_id: String,
    pub email: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "card".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnlockRequest {
    pub report_id: String,
}

pub(crate) async fn scan_handler<R, P>(
    State(state): State<AuditRouterState<R, P>>,
    axum::Json(request): axum::Json<ScanRequest>,
) -> Response
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    let url = match Url::parse(&request.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url,
        _ => {
            let payload = json!({ "error": "url must be absolute http or https" });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let document = match state.fetcher.fetch(url.as_str()).await {
        Ok(document) => document,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response();
        }
    };

    match state.service.scan(&document.final_url, &document.html) {
        Ok(payload) => (StatusCode::OK, axum::Json(payload)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn payment_handler<R, P>(
    State(state): State<AuditRouterState<R, P>>,
    axum::Json(request): axum::Json<PaymentRequest>,
) -> Response
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    let id = ReportId(request.report_id);
    match state
        .service
        .record_payment(&id, &request.email, &request.payment_method)
    {
        Ok(()) => {
            let payload = json!({ "reportId": id.0, "status": "paid" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn unlock_handler<R, P>(
    State(state): State<AuditRouterState<R, P>>,
    axum::Json(request): axum::Json<UnlockRequest>,
) -> Response
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    let id = ReportId(request.report_id);
    match state.service.unlock(&id) {
        Ok(payload) => (StatusCode::OK, axum::Json(payload)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn report_handler<R, P>(
    State(state): State<AuditRouterState<R, P>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    let id = ReportId(report_id);
    match state.service.report_status(&id) {
        Ok(payload) => (StatusCode::OK, axum::Json(payload)).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: AuditServiceError) -> Response {
    let status = match &error {
        AuditServiceError::ReportNotFound => StatusCode::NOT_FOUND,
        AuditServiceError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        AuditServiceError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        AuditServiceError::Repository(_) | AuditServiceError::Payment(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::audit::domain::ReportRecord;
    use crate::audit::fetch::{FetchError, FetchedDocument};
    use crate::audit::repository::{
        PaymentEntry, PaymentError, RepositoryError, ScanLogEntry,
    };

    #[derive(Default)]
    struct MemoryReports {
        rows: Mutex<HashMap<String, ReportRecord>>,
    }

    impl ReportRepository for MemoryReports {
        fn insert(&self, record: ReportRecord) -> Result<(), RepositoryError> {
            self.rows
                .lock()
                .unwrap()
                .insert(record.report_id.0.clone(), record);
            Ok(())
        }

        fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
            Ok(self.rows.lock().unwrap().get(&id.0).cloned())
        }

        fn mark_paid(&self, id: &ReportId) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let record = rows.get_mut(&id.0).ok_or(RepositoryError::NotFound)?;
            record.paid = true;
            Ok(())
        }

        fn recent(&self, limit: usize) -> Result<Vec<ScanLogEntry>, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            let mut entries: Vec<ScanLogEntry> = rows.values().map(|r| r.log_entry()).collect();
            entries.truncate(limit);
            Ok(entries)
        }
    }

    #[derive(Default)]
    struct MemoryLedger {
        settled: Mutex<Vec<String>>,
    }

    impl PaymentLedger for MemoryLedger {
        fn record(&self, entry: PaymentEntry) -> Result<(), PaymentError> {
            self.settled.lock().unwrap().push(entry.report_id.0);
            Ok(())
        }

        fn is_settled(&self, id: &ReportId) -> Result<bool, PaymentError> {
            Ok(self.settled.lock().unwrap().contains(&id.0))
        }
    }

    struct CannedFetcher;

    #[async_trait]
    impl DocumentFetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
            Ok(FetchedDocument {
                final_url: url.to_string(),
                html: "<html lang=\"en\"><head><title>Dockside Grill</title></head><body><h1>Dockside Grill</h1></body></html>".to_string(),
            })
        }
    }

    fn router() -> Router {
        let service = AuditService::new(
            Arc::new(MemoryReports::default()),
            Arc::new(MemoryLedger::default()),
        )
        .expect("registry is consistent");
        audit_router(AuditRouterState {
            service: Arc::new(service),
            fetcher: Arc::new(CannedFetcher),
        })
    }

    async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("body is json"))
    }

    #[tokio::test]
    async fn scan_rejects_non_http_urls() {
        let app = router();
        let (status, body) = post_json(&app, "/api/v1/scan", json!({ "url": "ftp://menu.example" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("http"));
    }

    #[tokio::test]
    async fn scan_then_unlock_flow_enforces_payment() {
        let app = router();

        let (status, report) =
            post_json(&app, "/api/v1/scan", json!({ "url": "https://dockside.example" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["locked"], json!(true));
        let report_id = report["reportId"].as_str().unwrap().to_string();

        let (status, _) =
            post_json(&app, "/api/v1/unlock", json!({ "reportId": report_id })).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

        let (status, _) = post_json(
            &app,
            "/api/v1/payments",
            json!({ "reportId": report_id, "email": "owner@dockside.example" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, unlocked) =
            post_json(&app, "/api/v1/unlock", json!({ "reportId": report_id })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(unlocked["locked"], json!(false));
        assert_eq!(unlocked["lockedInsights"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn unknown_report_returns_not_found() {
        let app = router();
        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/reports/nope")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn payment_with_bad_email_is_unprocessable() {
        let app = router();
        let (_, report) =
            post_json(&app, "/api/v1/scan", json!({ "url": "https://dockside.example" })).await;
        let report_id = report["reportId"].as_str().unwrap();

        let (status, _) = post_json(
            &app,
            "/api/v1/payments",
            json!({ "reportId": report_id, "email": "nope" }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
