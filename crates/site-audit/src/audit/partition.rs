//! Splits check results into open and paywalled insights.
//!
//! The quota of open insights scales with the overall score: stronger
//! sites preview more of their passing results up front. Only passing
//! checks are eligible for the open slice; every check appears exactly
//! once across the two slices. The locked slice lists the overflow
//! passing checks first, then every non-passing check, each group in
//! rubric order.

use crate::audit::domain::{CheckResult, Insight};
use crate::audit::insight;

/// How many passing checks are shown unlocked for a given score.
pub fn free_quota(score: u8) -> usize {
    match score {
        0..=30 => 2,
        31..=50 => 3,
        51..=70 => 4,
        71..=85 => 5,
        _ => 6,
    }
}

/// Partitions `checks` into (open, locked) insight lists.
pub fn partition_insights(checks: &[CheckResult], score: u8) -> (Vec<Insight>, Vec<Insight>) {
    let quota = free_quota(score);

    let mut free = Vec::with_capacity(quota);
    let mut overflow_passing = Vec::new();
    let mut other = Vec::new();

    for check in checks {
        if check.is_passing() {
            if free.len() < quota {
                free.push(insight::interpretation(check));
            } else {
                overflow_passing.push(insight::locked_insight(check));
            }
        } else {
            other.push(insight::locked_insight(check));
        }
    }

    overflow_passing.extend(other);
    (free, overflow_passing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::domain::{CheckId, CheckStatus};

    fn check(id: CheckId, status: CheckStatus) -> CheckResult {
        let (points, max_points) = match status {
            CheckStatus::Pass => (10, 10),
            CheckStatus::Warning => (5, 10),
            CheckStatus::Fail => (0, 10),
        };
        CheckResult {
            id,
            name: id.display_name().to_string(),
            points,
            max_points,
            status,
        }
    }

    fn all_passing(count: usize) -> Vec<CheckResult> {
        use CheckId::*;
        let ids = [
            Title,
            MetaDescription,
            StructuredData,
            SemanticElements,
            ImageAltText,
            HeadingHierarchy,
            OpenGraph,
            RobotsCrawlable,
        ];
        ids[..count]
            .iter()
            .map(|id| check(*id, CheckStatus::Pass))
            .collect()
    }

    #[test]
    fn quota_band_edges() {
        assert_eq!(free_quota(0), 2);
        assert_eq!(free_quota(30), 2);
        assert_eq!(free_quota(31), 3);
        assert_eq!(free_quota(50), 3);
        assert_eq!(free_quota(51), 4);
        assert_eq!(free_quota(70), 4);
        assert_eq!(free_quota(71), 5);
        assert_eq!(free_quota(85), 5);
        assert_eq!(free_quota(86), 6);
        assert_eq!(free_quota(100), 6);
    }

    #[test]
    fn each_check_lands_in_exactly_one_slice() {
        let checks = all_passing(8);
        let (free, locked) = partition_insights(&checks, 90);
        assert_eq!(free.len(), 6);
        assert_eq!(locked.len(), 2);
        assert!(free.iter().all(|i| !i.locked));
        assert!(locked.iter().all(|i| i.locked));
    }

    #[test]
    fn failing_checks_never_appear_open() {
        let checks = vec![
            check(CheckId::Title, CheckStatus::Fail),
            check(CheckId::MetaDescription, CheckStatus::Warning),
            check(CheckId::StructuredData, CheckStatus::Pass),
        ];
        let (free, locked) = partition_insights(&checks, 95);
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].title, "How AI categorizes your business");
        assert_eq!(locked.len(), 2);
    }

    #[test]
    fn open_slice_preserves_rubric_order() {
        let checks = vec![
            check(CheckId::Title, CheckStatus::Fail),
            check(CheckId::MetaDescription, CheckStatus::Pass),
            check(CheckId::StructuredData, CheckStatus::Pass),
            check(CheckId::SemanticElements, CheckStatus::Pass),
        ];
        let (free, _) = partition_insights(&checks, 20);
        assert_eq!(free.len(), 2);
        assert_eq!(free[0].title, "How AI summarizes your content");
        assert_eq!(free[1].title, "How AI categorizes your business");
    }

    #[test]
    fn locked_slice_lists_overflow_passing_before_non_passing() {
        let checks = vec![
            check(CheckId::Title, CheckStatus::Pass),
            check(CheckId::MetaDescription, CheckStatus::Fail),
            check(CheckId::StructuredData, CheckStatus::Pass),
            check(CheckId::SemanticElements, CheckStatus::Pass),
            check(CheckId::ImageAltText, CheckStatus::Pass),
        ];
        let (free, locked) = partition_insights(&checks, 10);

        assert_eq!(free.len(), 2);
        let locked_titles: Vec<&str> = locked.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            locked_titles,
            vec![
                "AI cannot confidently summarize what you do",
                "Visual content creates interpretation gaps",
                "Your value proposition is fragmented across pages",
            ]
        );
    }

    #[test]
    fn overflow_passing_checks_are_locked() {
        let checks = all_passing(5);
        let (free, locked) = partition_insights(&checks, 10);
        assert_eq!(free.len(), 2);
        assert_eq!(locked.len(), 3);
        assert!(locked.iter().all(|i| i.locked));
    }

    #[test]
    fn partition_is_pure() {
        let checks = all_passing(4);
        let first = partition_insights(&checks, 60);
        let second = partition_insights(&checks, 60);
        assert_eq!(first, second);
    }
}
