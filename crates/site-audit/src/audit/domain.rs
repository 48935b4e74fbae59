use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for each rubric check. Display text hangs off this
/// enum (see [`crate::audit::insight`]) so renaming user-facing copy can
/// never change how a check is scored or partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Title,
    MetaDescription,
    StructuredData,
    SemanticElements,
    ImageAltText,
    HeadingHierarchy,
    OpenGraph,
    RobotsCrawlable,
    LanguageAttribute,
    ViewportMeta,
    CharsetDeclared,
    CanonicalUrl,
    TwitterCard,
    AriaLabels,
    ContentLength,
    InternalLinks,
    InteractiveForms,
    AnalyticsTracking,
    CompleteHeadingHierarchy,
    MultimediaContent,
    RestaurantSchema,
    MenuInformation,
    LocationContact,
    OperatingHours,
    ReservationSystem,
    ReviewVisibility,
}

impl CheckId {
    /// Human-facing check name, kept byte-for-byte compatible with the
    /// original report wire format.
    pub fn display_name(self) -> &'static str {
        match self {
            CheckId::Title => "Has Title Tag",
            CheckId::MetaDescription => "Has Meta Description",
            CheckId::StructuredData => "Structured Data (Schema.org)",
            CheckId::SemanticElements => "Semantic HTML Elements",
            CheckId::ImageAltText => "Image Alt Text",
            CheckId::HeadingHierarchy => "Proper Heading Hierarchy",
            CheckId::OpenGraph => "Open Graph Tags",
            CheckId::RobotsCrawlable => "Crawlable by AI (Robots)",
            CheckId::LanguageAttribute => "HTML Language Attribute",
            CheckId::ViewportMeta => "Mobile Viewport Meta Tag",
            CheckId::CharsetDeclared => "Character Encoding Declaration",
            CheckId::CanonicalUrl => "Canonical URL",
            CheckId::TwitterCard => "Twitter Card Tags",
            CheckId::AriaLabels => "ARIA Labels & Accessibility",
            CheckId::ContentLength => "Content Length (AI Readable)",
            CheckId::InternalLinks => "Internal Linking Structure",
            CheckId::InteractiveForms => "Interactive Forms",
            CheckId::AnalyticsTracking => "Analytics Tracking",
            CheckId::CompleteHeadingHierarchy => "Complete Heading Hierarchy",
            CheckId::MultimediaContent => "Multimedia Content",
            CheckId::RestaurantSchema => "Restaurant/Bar Schema Markup",
            CheckId::MenuInformation => "Menu Information Available",
            CheckId::LocationContact => "Location & Contact Information",
            CheckId::OperatingHours => "Operating Hours Information",
            CheckId::ReservationSystem => "Reservation/Booking System",
            CheckId::ReviewVisibility => "Review Visibility & Integration",
        }
    }
}

/// Classification attached to each check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

/// Outcome of a single rubric rule; immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: CheckId,
    pub name: String,
    pub points: u8,
    pub max_points: u8,
    pub status: CheckStatus,
}

impl CheckResult {
    pub fn is_passing(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// Full rubric evaluation for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub score: u8,
    pub details: Vec<CheckResult>,
    pub total_checks: usize,
}

/// User-facing interpretation derived from one check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub explanation: String,
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Actionable recommendation emitted by the review-focused generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub impact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Opaque report handle used to retrieve and unlock stored audits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub String);

impl ReportId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response body for scan and unlock endpoints: a pure function of the
/// stored audit result and the partition policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub score: u8,
    pub summary: String,
    pub free_insights: Vec<Insight>,
    pub locked_insights: Vec<Insight>,
    pub total_insights: usize,
    pub report_id: ReportId,
    pub locked: bool,
    pub review_recommendations: Vec<Recommendation>,
}

/// Stored audit report, owned by the report repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub report_id: ReportId,
    pub url: String,
    pub audit: AuditResult,
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
    pub paid: bool,
}
