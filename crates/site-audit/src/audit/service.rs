use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ReportId, ReportPayload, ReportRecord};
use super::extractor;
use super::partition;
use super::recommend;
use super::repository::{
    PaymentEntry, PaymentError, PaymentLedger, ReportRepository, RepositoryError, ScanLogEntry,
};
use super::rubric::{self, RubricError};
use super::summary;

/// Service composing the signal extractor, rubric, partition policy, and
/// the report/payment stores.
pub struct AuditService<R, P> {
    repository: Arc<R>,
    payments: Arc<P>,
}

impl<R, P> AuditService<R, P>
where
    R: ReportRepository + 'static,
    P: PaymentLedger + 'static,
{
    /// Builds the service, refusing to start on an inconsistent rubric.
    pub fn new(repository: Arc<R>, payments: Arc<P>) -> Result<Self, RubricError> {
        rubric::validate_registry()?;
        Ok(Self {
            repository,
            payments,
        })
    }

    /// Audits a fetched document and persists the locked report.
    pub fn scan(&self, url: &str, html: &str) -> Result<ReportPayload, AuditServiceError> {
        let signals = extractor::extract(html);
        let audit = rubric::evaluate(&signals);
        let recommendations = recommend::generate_recommendations(&signals, html);

        let record = ReportRecord {
            report_id: ReportId::generate(),
            url: url.to_string(),
            audit,
            recommendations,
            created_at: Utc::now(),
            paid: false,
        };
        self.repository.insert(record.clone())?;

        info!(
            report_id = %record.report_id,
            score = record.audit.score,
            "scan stored"
        );

        Ok(Self::render(&record, true))
    }

    /// Records a settled payment and flags the report as paid.
    pub fn record_payment(
        &self,
        report_id: &ReportId,
        email: &str,
        method: &str,
    ) -> Result<(), AuditServiceError> {
        if !email.contains('@') {
            return Err(AuditServiceError::InvalidEmail);
        }
        self.repository
            .fetch(report_id)?
            .ok_or(AuditServiceError::ReportNotFound)?;

        self.payments.record(PaymentEntry {
            report_id: report_id.clone(),
            email: email.to_string(),
            method: method.to_string(),
            recorded_at: Utc::now(),
        })?;
        self.repository.mark_paid(report_id)?;

        info!(report_id = %report_id, "payment recorded");
        Ok(())
    }

    /// Returns the full report once its payment has settled.
    pub fn unlock(&self, report_id: &ReportId) -> Result<ReportPayload, AuditServiceError> {
        let record = self
            .repository
            .fetch(report_id)?
            .ok_or(AuditServiceError::ReportNotFound)?;

        let settled = record.paid || self.payments.is_settled(report_id)?;
        if !settled {
            return Err(AuditServiceError::PaymentRequired);
        }

        Ok(Self::render(&record, false))
    }

    /// Fetch a stored report's payload in its current visibility state.
    pub fn report_status(&self, report_id: &ReportId) -> Result<ReportPayload, AuditServiceError> {
        let record = self
            .repository
            .fetch(report_id)?
            .ok_or(AuditServiceError::ReportNotFound)?;
        Ok(Self::render(&record, !record.paid))
    }

    /// Most recent scans, newest first, for the admin listing.
    pub fn recent_scans(&self, limit: usize) -> Result<Vec<ScanLogEntry>, AuditServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    fn render(record: &ReportRecord, locked: bool) -> ReportPayload {
        let audit = &record.audit;
        let (free_insights, locked_insights) = if locked {
            partition::partition_insights(&audit.details, audit.score)
        } else {
            let all = audit
                .details
                .iter()
                .map(super::insight::interpretation)
                .collect();
            (all, Vec::new())
        };

        ReportPayload {
            score: audit.score,
            summary: summary::interpretive_summary(audit.score).to_string(),
            total_insights: audit.details.len(),
            free_insights,
            locked_insights,
            report_id: record.report_id.clone(),
            locked,
            review_recommendations: record.recommendations.clone(),
        }
    }
}

/// Error raised by the audit service.
#[derive(Debug, thiserror::Error)]
pub enum AuditServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("report not found")]
    ReportNotFound,
    #[error("report has not been paid for")]
    PaymentRequired,
    #[error("email address is not valid")]
    InvalidEmail,
}
