//! AI-readiness auditing for restaurant and bar websites.
//!
//! One scan runs the full pipeline: the extractor reduces raw markup to a
//! [`signals::SignalRecord`], the rubric scores it, the partition policy
//! splits the interpreted results into open and paywalled insights, and
//! the review generator attaches actionable recommendations. The service
//! module composes the pipeline with the report and payment stores; the
//! router exposes it over HTTP.

pub mod domain;
pub mod extractor;
pub mod fetch;
pub mod insight;
pub(crate) mod keywords;
pub mod partition;
pub mod recommend;
pub mod repository;
pub mod router;
pub(crate) mod rubric;
pub mod service;
pub mod signals;
pub mod summary;

pub use domain::{
    AuditResult, CheckId, CheckResult, CheckStatus, Insight, Priority, Recommendation, ReportId,
    ReportPayload, ReportRecord,
};
pub use fetch::{DocumentFetcher, FetchError, FetchedDocument};
pub use repository::{
    PaymentEntry, PaymentError, PaymentLedger, ReportRepository, RepositoryError, ScanLogEntry,
};
pub use router::{audit_router, AuditRouterState};
pub use rubric::{evaluate, validate_registry, RubricError};
pub use service::{AuditService, AuditServiceError};
pub use signals::SignalRecord;
