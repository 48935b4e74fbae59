use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};
use site_audit::audit::{
    DocumentFetcher, FetchError, FetchedDocument, PaymentEntry, PaymentError, PaymentLedger,
    ReportId, ReportRecord, ReportRepository, RepositoryError, ScanLogEntry,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<String, ReportRecord>>>,
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: ReportRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.report_id.0) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.report_id.0.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id.0).cloned())
    }

    fn mark_paid(&self, id: &ReportId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&id.0) {
            Some(record) => {
                record.paid = true;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScanLogEntry>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut entries: Vec<ScanLogEntry> = guard.values().map(|r| r.log_entry()).collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        Ok(entries)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPaymentLedger {
    entries: Arc<Mutex<Vec<PaymentEntry>>>,
}

impl PaymentLedger for InMemoryPaymentLedger {
    fn record(&self, entry: PaymentEntry) -> Result<(), PaymentError> {
        let mut guard = self.entries.lock().expect("ledger mutex poisoned");
        guard.push(entry);
        Ok(())
    }

    fn is_settled(&self, id: &ReportId) -> Result<bool, PaymentError> {
        let guard = self.entries.lock().expect("ledger mutex poisoned");
        Ok(guard.iter().any(|entry| entry.report_id == *id))
    }
}

const BROWSER_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MINIMAL_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Live fetcher with browser-shaped headers. Sites that answer 403 to
/// the full header set get one retry with a bare user agent.
pub(crate) struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    pub(crate) fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    fn browser_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
        headers.insert(
            "Upgrade-Insecure-Requests",
            HeaderValue::from_static("1"),
        );
        headers
    }

    /// Retry header set for sites that reject the full browser profile:
    /// nothing but a stripped-down user agent.
    fn minimal_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(MINIMAL_UA));
        headers
    }

    async fn get(&self, url: &str, headers: HeaderMap) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|err| FetchError::Request {
                url: url.to_string(),
                reason: err.to_string(),
            })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        let mut response = self.get(url, Self::browser_headers()).await?;

        if response.status() == reqwest::StatusCode::FORBIDDEN {
            response = self.get(url, Self::minimal_headers()).await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().to_string();
        let html = response.text().await.map_err(|err| FetchError::Body {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

        Ok(FetchedDocument { final_url, html })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_headers_use_a_stripped_user_agent_only() {
        let browser = HttpDocumentFetcher::browser_headers();
        let minimal = HttpDocumentFetcher::minimal_headers();

        assert_eq!(minimal.len(), 1);
        assert_eq!(
            minimal.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            Some(MINIMAL_UA)
        );
        assert_ne!(
            browser.get(USER_AGENT).and_then(|v| v.to_str().ok()),
            minimal.get(USER_AGENT).and_then(|v| v.to_str().ok())
        );
        assert!(browser.len() > minimal.len());
    }
}
