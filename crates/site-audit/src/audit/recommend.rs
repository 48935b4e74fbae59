//! Review-focused action items generated alongside every report.
//!
//! Conditional recommendations are emitted in a fixed order from the
//! extracted signals plus a few raw-markup probes; two entries are
//! unconditional so the list is never empty.

use crate::audit::domain::{Priority, Recommendation};
use crate::audit::signals::SignalRecord;

/// Builds the recommendation list for a scanned document.
///
/// `html` is the raw markup, used for the widget and wait-time probes
/// that look at text the signal pass does not retain.
pub fn generate_recommendations(record: &SignalRecord, html: &str) -> Vec<Recommendation> {
    let html_lower = html.to_lowercase();

    let has_google = record.review_platforms.iter().any(|p| p == "Google");
    let has_tripadvisor = record.review_platforms.iter().any(|p| p == "TripAdvisor");
    let has_yelp = record.review_platforms.iter().any(|p| p == "Yelp");

    let mut out = Vec::new();

    if !has_google && !has_tripadvisor && !has_yelp {
        out.push(Recommendation {
            category: "Review Visibility",
            priority: Priority::High,
            title: "Add Review Platform Links",
            description: "Link to your Google Business Profile, TripAdvisor, and Yelp pages. AI agents use these platforms to understand customer sentiment and make recommendations.",
            action: "Add prominent links to your Google Maps listing, TripAdvisor page, and Yelp profile in your website footer or contact section.",
            impact: "Increases discoverability in local search and AI-powered restaurant recommendations",
        });
    } else if !has_google {
        out.push(Recommendation {
            category: "Review Visibility",
            priority: Priority::High,
            title: "Add Google Business Profile Link",
            description: "Google Reviews are critical for AI agents. Most AI assistants prioritize Google Business listings when recommending restaurants.",
            action: "Add a link to your Google Business Profile and embed Google Reviews widget on your website.",
            impact: "Significantly improves visibility in Google-powered AI assistants and local search",
        });
    }

    if !has_review_widgets(&html_lower) {
        out.push(Recommendation {
            category: "Review Integration",
            priority: Priority::Medium,
            title: "Embed Review Widgets",
            description: "Displaying reviews directly on your website helps AI agents understand customer sentiment and your restaurant's strengths.",
            action: "Embed Google Reviews widget or TripAdvisor review snippets on your homepage or dedicated reviews page.",
            impact: "AI agents can better understand customer feedback and your restaurant's reputation",
        });
    }

    if record.social_media_links.is_empty() {
        out.push(Recommendation {
            category: "Social Proof",
            priority: Priority::Medium,
            title: "Link Social Media Accounts",
            description: "Social media posts and reviews provide additional signals for AI agents about your restaurant's popularity and customer engagement.",
            action: "Add links to your Instagram, Facebook, and other social media accounts. AI agents analyze social content for restaurant recommendations.",
            impact: "Increases signals for AI agents about your restaurant's popularity and customer engagement",
        });
    }

    if ["wait", "slow", "time"].iter().any(|w| html_lower.contains(w)) {
        out.push(Recommendation {
            category: "Service Optimization",
            priority: Priority::Medium,
            title: "Address Wait Time Concerns",
            description: "Many restaurant reviews mention wait times. Proactively address this on your website.",
            action: "Add information about reservation options, peak hours, or average wait times. Consider implementing online waitlist or reservation system.",
            impact: "Reduces negative review mentions and improves customer expectations",
        });
    }

    if !record.hours_info {
        out.push(Recommendation {
            category: "Information Clarity",
            priority: Priority::High,
            title: "Display Clear Operating Hours",
            description: "One of the most common review complaints is confusion about hours or arriving when closed.",
            action: "Prominently display your operating hours on your homepage and ensure they're accurate. Update for holidays and special events.",
            impact: "Reduces customer frustration and negative reviews about hours",
        });
    }

    if record.menu_links.is_empty() {
        out.push(Recommendation {
            category: "Menu Transparency",
            priority: Priority::High,
            title: "Make Menu Easily Accessible",
            description: "Reviews often mention menu clarity and availability. AI agents need menu information to make recommendations.",
            action: "Add a clear \"Menu\" link in navigation and ensure menu is easily accessible. Include prices and dietary information (vegan, gluten-free, etc.).",
            impact: "Improves customer decision-making and AI agent understanding of your offerings",
        });
    }

    out.push(Recommendation {
        category: "Review Management",
        priority: Priority::High,
        title: "Respond to Reviews Regularly",
        description: "AI agents analyze review responses to understand how restaurants handle customer feedback. Active engagement signals quality.",
        action: "Respond to reviews on Google, TripAdvisor, and Yelp within 24-48 hours. Thank positive reviewers and address concerns professionally.",
        impact: "Shows active customer engagement and improves AI agent perception of your restaurant's quality",
    });

    if record.image_count < 10 {
        out.push(Recommendation {
            category: "Visual Content",
            priority: Priority::Medium,
            title: "Add More High-Quality Photos",
            description: "Reviews with photos get more attention from AI agents. Visual content helps AI understand your restaurant's atmosphere and food quality.",
            action: "Add professional photos of your dishes, interior, and exterior. Encourage customers to share photos in reviews.",
            impact: "Increases visual signals for AI agents and improves customer trust",
        });
    }

    if !record.price_range_mentions {
        out.push(Recommendation {
            category: "Pricing Transparency",
            priority: Priority::Medium,
            title: "Clarify Price Range",
            description: "Price range is a key factor in AI agent recommendations. Unclear pricing can lead to mismatched customer expectations.",
            action: "Add price range indicators ($$, $$$) or average meal cost information. This helps AI agents match customers to appropriate restaurants.",
            impact: "Improves AI agent matching and reduces customer surprise about pricing",
        });
    }

    out.push(Recommendation {
        category: "Unique Selling Points",
        priority: Priority::Medium,
        title: "Highlight What Makes You Unique",
        description: "AI agents look for unique features when making recommendations. Common differentiators include: outdoor seating, live music, happy hour, private dining, etc.",
        action: "Clearly highlight special features, events, or unique aspects of your restaurant that customers mention positively in reviews.",
        impact: "Helps AI agents differentiate your restaurant and match it to specific customer preferences",
    });

    out
}

/// Raw-markup probe for embedded review widgets.
fn has_review_widgets(html_lower: &str) -> bool {
    let google_widget = html_lower.contains("google")
        && (html_lower.contains("review") || html_lower.contains("rating"))
        && (html_lower.contains("maps/embed") || html_lower.contains("place_id"));
    google_widget
        || html_lower.contains("tripadvisor")
        || (html_lower.contains("yelp") && html_lower.contains("review"))
}
