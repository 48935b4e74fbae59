mod rules;

use crate::audit::domain::{AuditResult, CheckId, CheckResult, CheckStatus};
use crate::audit::signals::SignalRecord;

/// Point award decided by one rule; always bounded by the check's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleScore {
    pub points: u8,
    pub status: CheckStatus,
}

/// One registered rubric check: a stable identifier, its weight, and the
/// pure rule that scores it.
pub(crate) struct CheckSpec {
    pub id: CheckId,
    pub max_points: u8,
    pub rule: fn(&SignalRecord) -> RuleScore,
}

/// Declaration order here fixes the order of check results in every report.
pub(crate) const REGISTRY: &[CheckSpec] = &[
    CheckSpec { id: CheckId::Title, max_points: 10, rule: rules::title },
    CheckSpec { id: CheckId::MetaDescription, max_points: 10, rule: rules::meta_description },
    CheckSpec { id: CheckId::StructuredData, max_points: 15, rule: rules::structured_data },
    CheckSpec { id: CheckId::SemanticElements, max_points: 15, rule: rules::semantic_elements },
    CheckSpec { id: CheckId::ImageAltText, max_points: 10, rule: rules::image_alt_text },
    CheckSpec { id: CheckId::HeadingHierarchy, max_points: 10, rule: rules::heading_hierarchy },
    CheckSpec { id: CheckId::OpenGraph, max_points: 10, rule: rules::open_graph },
    CheckSpec { id: CheckId::RobotsCrawlable, max_points: 10, rule: rules::robots_crawlable },
    CheckSpec { id: CheckId::LanguageAttribute, max_points: 10, rule: rules::language_attribute },
    CheckSpec { id: CheckId::ViewportMeta, max_points: 10, rule: rules::viewport_meta },
    CheckSpec { id: CheckId::CharsetDeclared, max_points: 10, rule: rules::charset_declared },
    CheckSpec { id: CheckId::CanonicalUrl, max_points: 10, rule: rules::canonical_url },
    CheckSpec { id: CheckId::TwitterCard, max_points: 10, rule: rules::twitter_card },
    CheckSpec { id: CheckId::AriaLabels, max_points: 10, rule: rules::aria_labels },
    CheckSpec { id: CheckId::ContentLength, max_points: 10, rule: rules::content_length },
    CheckSpec { id: CheckId::InternalLinks, max_points: 10, rule: rules::internal_links },
    CheckSpec { id: CheckId::InteractiveForms, max_points: 5, rule: rules::interactive_forms },
    CheckSpec { id: CheckId::AnalyticsTracking, max_points: 5, rule: rules::analytics_tracking },
    CheckSpec {
        id: CheckId::CompleteHeadingHierarchy,
        max_points: 10,
        rule: rules::complete_heading_hierarchy,
    },
    CheckSpec { id: CheckId::MultimediaContent, max_points: 5, rule: rules::multimedia_content },
    CheckSpec { id: CheckId::RestaurantSchema, max_points: 15, rule: rules::restaurant_schema },
    CheckSpec { id: CheckId::MenuInformation, max_points: 10, rule: rules::menu_information },
    CheckSpec { id: CheckId::LocationContact, max_points: 10, rule: rules::location_contact },
    CheckSpec { id: CheckId::OperatingHours, max_points: 10, rule: rules::operating_hours },
    CheckSpec { id: CheckId::ReservationSystem, max_points: 10, rule: rules::reservation_system },
    CheckSpec { id: CheckId::ReviewVisibility, max_points: 10, rule: rules::review_visibility },
];

/// Rubric misconfiguration; rejected when the service is built, never
/// surfaced per-request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("check '{check}' declares a non-positive maximum point value")]
    InvalidMaxPoints { check: &'static str },
    #[error("check '{check}' is registered more than once")]
    DuplicateCheck { check: &'static str },
}

pub fn validate_registry() -> Result<(), RubricError> {
    for (index, spec) in REGISTRY.iter().enumerate() {
        if spec.max_points == 0 {
            return Err(RubricError::InvalidMaxPoints {
                check: spec.id.display_name(),
            });
        }
        if REGISTRY[..index].iter().any(|earlier| earlier.id == spec.id) {
            return Err(RubricError::DuplicateCheck {
                check: spec.id.display_name(),
            });
        }
    }
    Ok(())
}

/// Runs every registered rule against the signal record and reduces the
/// awards to a 0..=100 score. Deterministic: identical signals always yield
/// identical results.
pub fn evaluate(signals: &SignalRecord) -> AuditResult {
    let mut details = Vec::with_capacity(REGISTRY.len());
    let mut total_points: u32 = 0;
    let mut max_points: u32 = 0;

    for spec in REGISTRY {
        let outcome = (spec.rule)(signals);
        debug_assert!(outcome.points <= spec.max_points);

        total_points += u32::from(outcome.points);
        max_points += u32::from(spec.max_points);
        details.push(CheckResult {
            id: spec.id,
            name: spec.id.display_name().to_string(),
            points: outcome.points,
            max_points: spec.max_points,
            status: outcome.status,
        });
    }

    AuditResult {
        score: percentage(total_points, max_points),
        total_checks: details.len(),
        details,
    }
}

/// `round(100 × points / max)`, half away from zero; zero when the rubric
/// is empty to guard the division.
fn percentage(points: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    ((f64::from(points) / f64::from(max)) * 100.0).round() as u8
}
