//! Keyword tables backing the free-text content detectors.
//!
//! Each detector is a flat list scanned against lowercased text, so adding
//! a cuisine or amenity is a one-line change with no new branching.

pub(crate) const CUISINE_KEYWORDS: &[&str] = &[
    "italian",
    "mexican",
    "chinese",
    "japanese",
    "thai",
    "indian",
    "french",
    "mediterranean",
    "american",
    "seafood",
    "steakhouse",
    "pizza",
    "sushi",
    "bbq",
    "barbecue",
    "asian",
    "fusion",
    "tapas",
    "bistro",
    "cafe",
    "brasserie",
    "pub",
    "bar",
    "grill",
    "diner",
];

pub(crate) const DIETARY_KEYWORDS: &[&str] = &[
    "vegan",
    "vegetarian",
    "gluten-free",
    "gluten free",
    "dairy-free",
    "dairy free",
    "keto",
    "paleo",
    "halal",
    "kosher",
    "nut-free",
    "nut free",
    "allergy",
    "allergen",
];

pub(crate) const FEATURE_KEYWORDS: &[&str] = &[
    "outdoor seating",
    "patio",
    "terrace",
    "live music",
    "entertainment",
    "happy hour",
    "brunch",
    "breakfast",
    "lunch",
    "dinner",
    "late night",
    "late-night",
    "wine bar",
    "cocktail",
    "craft beer",
    "draft beer",
    "full bar",
    "rooftop",
    "waterfront",
    "fireplace",
    "private room",
    "private dining",
    "event space",
    "catering",
    "takeout",
    "take-out",
    "delivery",
    "curbside",
    "parking",
    "valet",
    "wifi",
    "wi-fi",
    "pet friendly",
    "dog friendly",
];

pub(crate) const LOCATION_KEYWORDS: &[&str] = &[
    "address", "location", "street", "avenue", "road", "zip", "postal",
];

pub(crate) const HOURS_KEYWORDS: &[&str] = &[
    "hours",
    "open",
    "closed",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "am",
    "pm",
];

pub(crate) const REVIEW_KEYWORDS: &[&str] = &[
    "review",
    "rating",
    "star",
    "yelp",
    "tripadvisor",
    "google review",
];

pub(crate) const PRICE_RANGE_KEYWORDS: &[&str] = &[
    "$",
    "price",
    "affordable",
    "moderate",
    "upscale",
    "fine dining",
    "budget",
];

/// Review platforms recognized in outbound hrefs, paired with the label
/// surfaced to the recommendation generator.
pub(crate) const REVIEW_PLATFORMS: &[(&str, &str)] = &[
    ("google.com/maps", "Google"),
    ("g.page", "Google"),
    ("business.google", "Google"),
    ("tripadvisor", "TripAdvisor"),
    ("yelp.com", "Yelp"),
    ("opentable", "OpenTable"),
];

pub(crate) const SOCIAL_PLATFORMS: &[&str] = &[
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "x.com",
    "tiktok.com",
];

pub(crate) const ANALYTICS_MARKERS: &[&str] = &["analytics", "gtag", "ga("];

pub(crate) const MENU_LINK_KEYWORDS: &[&str] = &["menu"];

pub(crate) const RESERVATION_LINK_KEYWORDS: &[&str] = &["reserv", "book", "table", "booking"];

/// Returns true when `text` (already lowercased) contains any listed keyword.
pub(crate) fn matches_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Appends each keyword hit to `found`, deduplicating case-insensitively.
pub(crate) fn collect_matches(text: &str, keywords: &[&str], found: &mut Vec<String>) {
    for keyword in keywords {
        if text.contains(keyword) && !found.iter().any(|seen| seen.eq_ignore_ascii_case(keyword)) {
            found.push((*keyword).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_finds_embedded_keyword() {
        assert!(matches_any("open daily, monday through sunday", HOURS_KEYWORDS));
        assert!(!matches_any("just some plain copy", LOCATION_KEYWORDS));
    }

    #[test]
    fn collect_matches_deduplicates_case_insensitively() {
        let mut found = vec!["Vegan".to_string()];
        collect_matches("vegan options and gluten-free crusts", DIETARY_KEYWORDS, &mut found);
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|hit| hit == "gluten-free"));
    }

    #[test]
    fn review_platform_table_labels_google_properties() {
        let labels: Vec<&str> = REVIEW_PLATFORMS
            .iter()
            .filter(|(needle, _)| "https://google.com/maps/place/x".contains(needle))
            .map(|(_, label)| *label)
            .collect();
        assert_eq!(labels, vec!["Google"]);
    }
}
