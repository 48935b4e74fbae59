use serde::{Deserialize, Serialize};

use super::domain::{ReportId, ReportRecord};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError>;
    fn mark_paid(&self, id: &ReportId) -> Result<(), RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<ScanLogEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Ledger of settled payments, keyed by report.
pub trait PaymentLedger: Send + Sync {
    fn record(&self, entry: PaymentEntry) -> Result<(), PaymentError>;
    fn is_settled(&self, id: &ReportId) -> Result<bool, PaymentError>;
}

/// One settled payment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub report_id: ReportId,
    pub email: String,
    pub method: String,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

/// Payment ledger failure.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized scan-history row for the admin listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLogEntry {
    pub report_id: ReportId,
    pub url: String,
    pub score: u8,
    pub paid: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ReportRecord {
    pub fn log_entry(&self) -> ScanLogEntry {
        ScanLogEntry {
            report_id: self.report_id.clone(),
            url: self.url.clone(),
            score: self.audit.score,
            paid: self.paid,
            created_at: self.created_at,
        }
    }
}
