/// Flat snapshot of structural facts pulled from one HTML document.
///
/// Populated in a single pass by [`crate::audit::extractor::extract`] and
/// treated as read-only by every downstream stage. Absent markup simply
/// leaves fields at their defaults, so a malformed document can never make
/// an audit fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalRecord {
    // Scalar presence/value fields.
    pub title: String,
    pub meta_description: String,
    pub robots_meta: String,
    pub canonical_url: String,
    pub lang_attribute: String,
    pub charset: String,
    pub viewport: String,

    // Counters.
    pub json_ld_count: u32,
    pub microdata_count: u32,
    pub heading_counts: [u32; 6],
    pub image_count: u32,
    pub images_with_alt: u32,
    pub og_tag_count: u32,
    pub aria_label_count: u32,
    pub semantic_element_count: u32,
    pub form_count: u32,
    pub video_count: u32,
    pub iframe_count: u32,
    pub content_length: usize,

    // Collections.
    pub links: Vec<String>,
    pub menu_links: Vec<String>,
    pub reservation_links: Vec<String>,
    pub script_sources: Vec<String>,
    pub stylesheets: Vec<String>,

    // Flags derived from tags and attributes.
    pub twitter_card: bool,
    pub analytics_tracking: bool,

    // Restaurant/bar signals derived from text and structured data.
    pub restaurant_schema: bool,
    pub location_info: bool,
    pub hours_info: bool,
    pub phone_number: bool,
    pub review_mentions: bool,
    pub rating_mentions: bool,
    pub price_range_mentions: bool,
    pub cuisine_types: Vec<String>,
    pub dietary_options: Vec<String>,
    pub special_features: Vec<String>,
    pub review_platforms: Vec<String>,
    pub social_media_links: Vec<String>,
}

impl SignalRecord {
    pub fn h1_count(&self) -> u32 {
        self.heading_counts[0]
    }

    pub fn h2_count(&self) -> u32 {
        self.heading_counts[1]
    }

    /// Links that stay on the site: root-relative paths and fragments.
    pub fn internal_link_count(&self) -> usize {
        self.links
            .iter()
            .filter(|href| href.starts_with('/') || href.starts_with('#'))
            .count()
    }

    pub fn has_multimedia(&self) -> bool {
        self.video_count > 0 || self.iframe_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_link_count_ignores_absolute_urls() {
        let record = SignalRecord {
            links: vec![
                "/menu".to_string(),
                "#hours".to_string(),
                "https://example.com".to_string(),
                "mailto:hi@example.com".to_string(),
            ],
            ..SignalRecord::default()
        };
        assert_eq!(record.internal_link_count(), 2);
    }

    #[test]
    fn default_record_has_no_signals() {
        let record = SignalRecord::default();
        assert_eq!(record.h1_count(), 0);
        assert!(!record.has_multimedia());
        assert!(record.title.is_empty());
    }
}
