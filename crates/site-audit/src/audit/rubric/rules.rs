//! Pure rubric rules. Every function maps a [`SignalRecord`] to a bounded
//! point award plus a status; no rule reads another rule's output.
//!
//! Threshold constants are part of the product's published rubric and must
//! not drift: tests pin the boundary values.

use super::RuleScore;
use crate::audit::domain::CheckStatus;
use crate::audit::signals::SignalRecord;

fn full_or_fail(earned: bool, max: u8) -> RuleScore {
    if earned {
        RuleScore {
            points: max,
            status: CheckStatus::Pass,
        }
    } else {
        RuleScore {
            points: 0,
            status: CheckStatus::Fail,
        }
    }
}

fn status_at(points: u8, pass_at: u8, warn_above: u8) -> CheckStatus {
    if points >= pass_at {
        CheckStatus::Pass
    } else if points > warn_above {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    }
}

pub(super) fn title(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.title.trim().is_empty(), 10)
}

pub(super) fn meta_description(signals: &SignalRecord) -> RuleScore {
    let description = &signals.meta_description;
    let points = if description.len() > 50 {
        10
    } else if !description.is_empty() {
        5
    } else {
        0
    };
    let status = match points {
        10 => CheckStatus::Pass,
        5 => CheckStatus::Warning,
        _ => CheckStatus::Fail,
    };
    RuleScore { points, status }
}

pub(super) fn structured_data(signals: &SignalRecord) -> RuleScore {
    let points = if signals.json_ld_count > 0 {
        15
    } else if signals.microdata_count > 0 {
        10
    } else {
        0
    };
    let status = if points >= 10 {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    RuleScore { points, status }
}

pub(super) fn semantic_elements(signals: &SignalRecord) -> RuleScore {
    let points = if signals.semantic_element_count >= 3 {
        15
    } else if signals.semantic_element_count > 0 {
        8
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 10, 0),
    }
}

/// Zero images is defined as full credit; otherwise the alt ratio is scaled
/// to ten points and rounded half away from zero.
pub(super) fn image_alt_text(signals: &SignalRecord) -> RuleScore {
    let points = if signals.image_count == 0 {
        10
    } else {
        scaled_ratio(signals.images_with_alt, signals.image_count, 10.0)
    };
    let status = if points >= 8 {
        CheckStatus::Pass
    } else if points >= 5 {
        CheckStatus::Warning
    } else {
        CheckStatus::Fail
    };
    RuleScore { points, status }
}

pub(super) fn heading_hierarchy(signals: &SignalRecord) -> RuleScore {
    let h1 = signals.h1_count();
    let points = if h1 == 1 && signals.h2_count() > 0 {
        10
    } else if h1 == 1 {
        7
    } else if h1 > 0 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 7, 0),
    }
}

pub(super) fn open_graph(signals: &SignalRecord) -> RuleScore {
    let points = if signals.og_tag_count >= 3 {
        10
    } else if signals.og_tag_count > 0 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 7, 0),
    }
}

/// Default-allow: absence of a robots meta means crawlers are welcome.
pub(super) fn robots_crawlable(signals: &SignalRecord) -> RuleScore {
    let crawlable = signals.robots_meta.is_empty() || !signals.robots_meta.contains("noindex");
    full_or_fail(crawlable, 10)
}

pub(super) fn language_attribute(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.lang_attribute.is_empty(), 10)
}

pub(super) fn viewport_meta(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.viewport.is_empty(), 10)
}

pub(super) fn charset_declared(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.charset.is_empty(), 10)
}

pub(super) fn canonical_url(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.canonical_url.is_empty(), 10)
}

pub(super) fn twitter_card(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.twitter_card, 10)
}

pub(super) fn aria_labels(signals: &SignalRecord) -> RuleScore {
    let points = if signals.aria_label_count >= 3 {
        10
    } else if signals.aria_label_count > 0 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

pub(super) fn content_length(signals: &SignalRecord) -> RuleScore {
    let points = if signals.content_length > 1000 {
        10
    } else if signals.content_length > 500 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

pub(super) fn internal_links(signals: &SignalRecord) -> RuleScore {
    let internal = signals.internal_link_count();
    let points = if internal >= 5 {
        10
    } else if internal > 0 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

pub(super) fn interactive_forms(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.form_count > 0, 5)
}

pub(super) fn analytics_tracking(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.analytics_tracking, 5)
}

pub(super) fn complete_heading_hierarchy(signals: &SignalRecord) -> RuleScore {
    let points = if signals.h1_count() == 1 && signals.h2_count() > 0 {
        10
    } else if signals.h1_count() == 1 {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

pub(super) fn multimedia_content(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.has_multimedia(), 5)
}

pub(super) fn restaurant_schema(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.restaurant_schema, 15)
}

pub(super) fn menu_information(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.menu_links.is_empty(), 10)
}

pub(super) fn location_contact(signals: &SignalRecord) -> RuleScore {
    let points = if signals.location_info && signals.phone_number {
        10
    } else if signals.location_info || signals.phone_number {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

pub(super) fn operating_hours(signals: &SignalRecord) -> RuleScore {
    full_or_fail(signals.hours_info, 10)
}

pub(super) fn reservation_system(signals: &SignalRecord) -> RuleScore {
    full_or_fail(!signals.reservation_links.is_empty(), 10)
}

pub(super) fn review_visibility(signals: &SignalRecord) -> RuleScore {
    let points = if !signals.review_platforms.is_empty() {
        10
    } else if signals.review_mentions || signals.rating_mentions {
        5
    } else {
        0
    };
    RuleScore {
        points,
        status: status_at(points, 8, 0),
    }
}

/// Round half away from zero, matching the documented rubric rounding rule.
fn scaled_ratio(numerator: u32, denominator: u32, scale: f64) -> u8 {
    ((f64::from(numerator) / f64::from(denominator)) * scale).round() as u8
}
