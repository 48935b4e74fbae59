//! Score-banded interpretive summary shown at the top of a report.

/// One sentence describing how well AI agents understand the site,
/// selected by score band.
pub fn interpretive_summary(score: u8) -> &'static str {
    if score >= 80 {
        "AI agents have a strong understanding of your restaurant or bar, making you highly discoverable in food-related searches and recommendations."
    } else if score >= 60 {
        "AI agents partially understand your establishment, but several important signals remain unclear, limiting your visibility in discovery searches."
    } else if score >= 40 {
        "AI agents form an incomplete understanding of your restaurant or bar, with significant gaps that reduce your discoverability."
    } else {
        "AI agents struggle to identify and understand your establishment, making you nearly invisible in food discovery searches and recommendations."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_pick_the_right_copy() {
        assert!(interpretive_summary(80).contains("strong understanding"));
        assert!(interpretive_summary(100).contains("strong understanding"));
        assert!(interpretive_summary(79).contains("partially understand"));
        assert!(interpretive_summary(60).contains("partially understand"));
        assert!(interpretive_summary(59).contains("incomplete understanding"));
        assert!(interpretive_summary(40).contains("incomplete understanding"));
        assert!(interpretive_summary(39).contains("struggle to identify"));
        assert!(interpretive_summary(0).contains("struggle to identify"));
    }
}
