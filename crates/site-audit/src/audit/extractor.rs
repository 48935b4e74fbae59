use super::keywords;
use super::signals::SignalRecord;
use regex::Regex;
use scraper::node::Element;
use scraper::{Html, Node};
use serde_json::Value;
use std::sync::OnceLock;

const SEMANTIC_TAGS: &[&str] = &[
    "header", "nav", "main", "article", "section", "aside", "footer",
];

/// Builds a [`SignalRecord`] from raw HTML in one linear pass over the
/// document in tree order. Malformed or truncated markup is recovered by
/// the underlying html5ever parser, so this never fails; missing structure
/// just leaves the affected fields at their defaults. The parsed tree is
/// dropped before returning.
pub fn extract(html: &str) -> SignalRecord {
    let mut record = SignalRecord::default();
    let document = Html::parse_document(html);

    for node in document.root_element().descendants() {
        match node.value() {
            Node::Element(element) => visit_element(element, &mut record),
            Node::Text(text) => {
                let in_title = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|parent| parent.name() == "title");
                visit_text(text, in_title, &mut record);
            }
            _ => {}
        }
    }

    record.restaurant_schema = sniff_restaurant_schema(html);
    record
}

fn visit_element(element: &Element, record: &mut SignalRecord) {
    let tag = element.name();

    if element.attr("itemscope").is_some() {
        record.microdata_count += 1;
    }
    if element.attr("aria-label").is_some() || element.attr("aria-labelledby").is_some() {
        record.aria_label_count += 1;
    }
    if SEMANTIC_TAGS.contains(&tag) {
        record.semantic_element_count += 1;
    }

    match tag {
        "html" => {
            if let Some(lang) = element.attr("lang") {
                record.lang_attribute = lang.to_string();
            }
        }
        "meta" => visit_meta(element, record),
        "link" => match element.attr("rel") {
            Some("stylesheet") => {
                record
                    .stylesheets
                    .push(element.attr("href").unwrap_or_default().to_string());
            }
            Some("canonical") => {
                if let Some(href) = element.attr("href") {
                    record.canonical_url = href.to_string();
                }
            }
            _ => {}
        },
        "script" => {
            if element.attr("type") == Some("application/ld+json") {
                record.json_ld_count += 1;
            }
            let src = element.attr("src").unwrap_or_default();
            if keywords::matches_any(&src.to_lowercase(), keywords::ANALYTICS_MARKERS) {
                record.analytics_tracking = true;
            }
            record.script_sources.push(src.to_string());
        }
        "img" => {
            record.image_count += 1;
            if element.attr("alt").is_some() {
                record.images_with_alt += 1;
            }
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag.as_bytes()[1] - b'1';
            record.heading_counts[level as usize] += 1;
        }
        "a" => {
            if let Some(href) = element.attr("href") {
                if !href.is_empty() {
                    visit_anchor(href, record);
                }
            }
        }
        "form" => record.form_count += 1,
        "video" => record.video_count += 1,
        "iframe" => record.iframe_count += 1,
        _ => {}
    }
}

fn visit_meta(element: &Element, record: &mut SignalRecord) {
    let content = element.attr("content").unwrap_or_default();

    match element.attr("name") {
        Some("description") => record.meta_description = content.to_string(),
        Some("robots") => record.robots_meta = content.to_string(),
        Some("viewport") => record.viewport = content.to_string(),
        Some(name) if name.starts_with("twitter:") => record.twitter_card = true,
        _ => {}
    }

    if element
        .attr("property")
        .is_some_and(|property| property.starts_with("og:"))
    {
        record.og_tag_count += 1;
    }

    if let Some(charset) = element.attr("charset") {
        if !charset.is_empty() {
            record.charset = charset.to_string();
        }
    }
}

/// An anchor can feed several collections at once: the general link list
/// plus any keyword-matched subset its href qualifies for.
fn visit_anchor(href: &str, record: &mut SignalRecord) {
    record.links.push(href.to_string());
    let href_lower = href.to_lowercase();

    if keywords::matches_any(&href_lower, keywords::MENU_LINK_KEYWORDS) {
        record.menu_links.push(href.to_string());
    }
    if keywords::matches_any(&href_lower, keywords::RESERVATION_LINK_KEYWORDS) {
        record.reservation_links.push(href.to_string());
    }
    for (needle, label) in keywords::REVIEW_PLATFORMS {
        if href_lower.contains(needle)
            && !record.review_platforms.iter().any(|seen| seen == label)
        {
            record.review_platforms.push((*label).to_string());
        }
    }
    if keywords::matches_any(&href_lower, keywords::SOCIAL_PLATFORMS) {
        record.social_media_links.push(href.to_string());
    }
}

fn visit_text(text: &str, in_title: bool, record: &mut SignalRecord) {
    if in_title {
        record.title.push_str(text);
    }
    record.content_length += text.len();

    if text.trim().is_empty() {
        return;
    }

    let lowered = text.to_lowercase();

    if keywords::matches_any(&lowered, keywords::LOCATION_KEYWORDS) {
        record.location_info = true;
    }
    if keywords::matches_any(&lowered, keywords::HOURS_KEYWORDS) {
        record.hours_info = true;
    }
    if phone_regex().is_match(text) {
        record.phone_number = true;
    }
    if keywords::matches_any(&lowered, keywords::REVIEW_KEYWORDS) {
        record.review_mentions = true;
    }
    if rating_regex().is_match(&lowered) || text.contains('⭐') || text.contains('★') {
        record.rating_mentions = true;
    }
    if keywords::matches_any(&lowered, keywords::PRICE_RANGE_KEYWORDS) {
        record.price_range_mentions = true;
    }

    keywords::collect_matches(&lowered, keywords::CUISINE_KEYWORDS, &mut record.cuisine_types);
    keywords::collect_matches(&lowered, keywords::DIETARY_KEYWORDS, &mut record.dietary_options);
    keywords::collect_matches(&lowered, keywords::FEATURE_KEYWORDS, &mut record.special_features);
}

/// Scans the raw text for JSON-LD blocks and flags a recognized
/// restaurant/bar schema. One unparseable block never aborts the sniff.
fn sniff_restaurant_schema(html: &str) -> bool {
    for capture in json_ld_regex().captures_iter(html) {
        let body = capture.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            continue;
        };

        let found = match &value {
            Value::Object(_) => has_restaurant_type(&value),
            Value::Array(items) => items.iter().any(has_restaurant_type),
            _ => false,
        };
        if found {
            return true;
        }
    }
    false
}

fn has_restaurant_type(value: &Value) -> bool {
    value
        .get("@type")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .is_some_and(|schema_type| {
            schema_type.contains("restaurant")
                || schema_type.contains("foodestablishment")
                || schema_type.contains("bar")
        })
}

fn json_ld_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#)
            .expect("json-ld pattern compiles")
    })
}

fn phone_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern compiles")
    })
}

fn rating_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\d+\.?\d*\s*(star|rating|out of)").expect("rating pattern compiles")
    })
}
