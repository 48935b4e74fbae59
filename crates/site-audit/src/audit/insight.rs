//! Turns raw check results into user-facing interpretation language.
//!
//! Both transforms are total: every check resolves through the `CheckId`
//! tables below, and anything missing from a table falls back to a
//! templated title/explanation derived from the check's display name.

use crate::audit::domain::{CheckId, CheckResult, Insight};

struct InterpretationText {
    id: CheckId,
    title: &'static str,
    pass: &'static str,
    fail: &'static str,
}

const INTERPRETATIONS: &[InterpretationText] = &[
    InterpretationText {
        id: CheckId::Title,
        title: "How AI identifies your website",
        pass: "AI systems use your page title to understand what your site is about. Your title clearly communicates your purpose.",
        fail: "AI systems use your page title to understand what your site is about. Your title is missing or unclear, making it harder for AI to identify your website's purpose.",
    },
    InterpretationText {
        id: CheckId::MetaDescription,
        title: "How AI summarizes your content",
        pass: "AI uses meta descriptions to create summaries of your website. Your description helps AI accurately summarize your content.",
        fail: "AI uses meta descriptions to create summaries of your website. Without a clear description, AI may create incomplete or inaccurate summaries of what you offer.",
    },
    InterpretationText {
        id: CheckId::StructuredData,
        title: "How AI categorizes your business",
        pass: "Structured data helps AI understand what type of business or content you represent. AI can clearly categorize your website.",
        fail: "Structured data helps AI understand what type of business or content you represent. AI may struggle to categorize your website without structured data signals.",
    },
    InterpretationText {
        id: CheckId::SemanticElements,
        title: "How AI navigates your content structure",
        pass: "Semantic HTML helps AI understand the organization of your content. AI can easily navigate and understand your content structure.",
        fail: "Semantic HTML helps AI understand the organization of your content. AI may misinterpret the importance and relationship of different sections on your site.",
    },
    InterpretationText {
        id: CheckId::ImageAltText,
        title: "How AI understands your visual content",
        pass: "Images without descriptions create gaps in AI understanding. AI can interpret the meaning of your images.",
        fail: "Images without descriptions create gaps in AI understanding. AI cannot understand what your images represent, creating blind spots in interpretation.",
    },
    InterpretationText {
        id: CheckId::HeadingHierarchy,
        title: "How AI maps your content hierarchy",
        pass: "Headings help AI understand what topics are most important on your page. AI can accurately map your content hierarchy and main topics.",
        fail: "Headings help AI understand what topics are most important on your page. AI may misunderstand which topics are most important on your website.",
    },
    InterpretationText {
        id: CheckId::OpenGraph,
        title: "How AI represents your site in summaries",
        pass: "Social media tags influence how AI describes your site when sharing. AI has clear signals for how to represent your website.",
        fail: "Social media tags influence how AI describes your site when sharing. AI may use incomplete information when describing your website in summaries or recommendations.",
    },
    InterpretationText {
        id: CheckId::RobotsCrawlable,
        title: "Whether AI can access your content",
        pass: "AI systems can fully access and interpret your website.",
        fail: "Your website blocks AI access, preventing proper interpretation of your content.",
    },
    InterpretationText {
        id: CheckId::LanguageAttribute,
        title: "How AI identifies your content language",
        pass: "AI can correctly identify the language of your content.",
        fail: "AI may misinterpret the language of your content, affecting how it's processed and understood.",
    },
    InterpretationText {
        id: CheckId::ViewportMeta,
        title: "How AI interprets your mobile experience",
        pass: "AI understands your site is optimized for mobile devices.",
        fail: "AI may not recognize your mobile optimization, affecting how your site is interpreted across devices.",
    },
    InterpretationText {
        id: CheckId::CharsetDeclared,
        title: "How AI reads your text content",
        pass: "AI can correctly read and interpret all text characters on your site.",
        fail: "AI may misinterpret special characters, leading to incorrect text interpretation.",
    },
    InterpretationText {
        id: CheckId::CanonicalUrl,
        title: "How AI identifies your primary content",
        pass: "AI understands which version of your content is primary.",
        fail: "AI may be confused about which version of your content is the main one to interpret.",
    },
    InterpretationText {
        id: CheckId::TwitterCard,
        title: "How AI represents you on social platforms",
        pass: "AI has clear signals for representing your site on social platforms.",
        fail: "AI may use incomplete information when representing your website on social platforms.",
    },
    InterpretationText {
        id: CheckId::AriaLabels,
        title: "How AI understands your interactive elements",
        pass: "AI can understand the purpose of interactive elements on your site.",
        fail: "AI may misinterpret the function of buttons, forms, and other interactive elements.",
    },
    InterpretationText {
        id: CheckId::ContentLength,
        title: "How much context AI has about your site",
        pass: "AI has sufficient content to form a comprehensive understanding.",
        fail: "AI has limited content to work with, leading to incomplete interpretations.",
    },
    InterpretationText {
        id: CheckId::InternalLinks,
        title: "How AI maps relationships between your pages",
        pass: "AI can understand how your pages relate to each other.",
        fail: "AI may not understand the relationships between different parts of your website.",
    },
    InterpretationText {
        id: CheckId::InteractiveForms,
        title: "How AI interprets your user engagement",
        pass: "AI recognizes interactive elements that indicate user engagement.",
        fail: "AI may not recognize ways users can interact with your site.",
    },
    InterpretationText {
        id: CheckId::AnalyticsTracking,
        title: "How AI understands your measurement approach",
        pass: "AI recognizes that you track website performance.",
        fail: "AI has no signals about how you measure website effectiveness.",
    },
    InterpretationText {
        id: CheckId::CompleteHeadingHierarchy,
        title: "How AI organizes your content topics",
        pass: "AI can organize and prioritize your content topics accurately.",
        fail: "AI may misorganize the importance of different topics on your site.",
    },
    InterpretationText {
        id: CheckId::MultimediaContent,
        title: "How AI processes your rich media",
        pass: "AI recognizes rich media content on your site.",
        fail: "AI may not recognize multimedia elements that are part of your content.",
    },
    InterpretationText {
        id: CheckId::RestaurantSchema,
        title: "How AI identifies your restaurant or bar",
        pass: "AI agents can clearly identify your establishment as a restaurant or bar, making you discoverable in food-related queries.",
        fail: "AI agents may not recognize your website as a restaurant or bar, making you invisible in food discovery searches.",
    },
    InterpretationText {
        id: CheckId::MenuInformation,
        title: "How AI understands what you serve",
        pass: "AI agents can find your menu and understand your offerings, helping customers discover your cuisine.",
        fail: "AI agents cannot find your menu, making it impossible to recommend your dishes or cuisine type to customers.",
    },
    InterpretationText {
        id: CheckId::LocationContact,
        title: "How AI helps customers find you",
        pass: "AI agents can provide your location and contact info to customers searching for nearby restaurants.",
        fail: "AI agents cannot help customers find your location or contact you, reducing local discovery.",
    },
    InterpretationText {
        id: CheckId::OperatingHours,
        title: "How AI knows when you are open",
        pass: "AI agents can tell customers when you are open, enabling real-time recommendations.",
        fail: "AI agents cannot determine your hours, so they may recommend you when you are closed or skip you during open hours.",
    },
    InterpretationText {
        id: CheckId::ReservationSystem,
        title: "How AI helps customers book tables",
        pass: "AI agents can direct customers to your booking system, enabling seamless reservations.",
        fail: "AI agents cannot help customers make reservations, reducing conversion opportunities.",
    },
    InterpretationText {
        id: CheckId::ReviewVisibility,
        title: "How AI understands customer sentiment",
        pass: "AI agents can access and analyze customer reviews to understand your restaurant reputation and customer satisfaction.",
        fail: "AI agents cannot find or analyze customer reviews, missing critical signals about your restaurant quality and customer satisfaction.",
    },
];

const LOCKED_TITLES: &[(CheckId, &str)] = &[
    (CheckId::Title, "AI misidentifies your primary purpose"),
    (CheckId::MetaDescription, "Your value proposition is fragmented across pages"),
    (CheckId::StructuredData, "Authority signals are weaker than expected"),
    (CheckId::SemanticElements, "AI cannot confidently summarize what you do"),
    (CheckId::ImageAltText, "Visual content creates interpretation gaps"),
    (CheckId::HeadingHierarchy, "Topic importance is unclear to AI"),
    (CheckId::OpenGraph, "Social representation lacks clarity"),
    (CheckId::RobotsCrawlable, "Access restrictions limit AI understanding"),
    (CheckId::LanguageAttribute, "Language interpretation may be incorrect"),
    (CheckId::ViewportMeta, "Mobile experience signals are missing"),
    (CheckId::CharsetDeclared, "Text interpretation may have errors"),
    (CheckId::CanonicalUrl, "Primary content version is ambiguous"),
    (CheckId::TwitterCard, "Social platform representation is incomplete"),
    (CheckId::AriaLabels, "Interactive element purposes are unclear"),
    (CheckId::ContentLength, "Insufficient context for complete interpretation"),
    (CheckId::InternalLinks, "Page relationships are not well understood"),
    (CheckId::InteractiveForms, "User engagement signals are missing"),
    (CheckId::AnalyticsTracking, "Measurement approach is not recognized"),
    (CheckId::CompleteHeadingHierarchy, "Content organization is unclear"),
    (CheckId::MultimediaContent, "Rich media is not properly recognized"),
    (CheckId::RestaurantSchema, "AI cannot identify your establishment type"),
    (CheckId::MenuInformation, "Your menu is invisible to AI agents"),
    (CheckId::LocationContact, "Customers cannot find your location"),
    (CheckId::OperatingHours, "AI does not know when you are open"),
    (CheckId::ReservationSystem, "AI cannot help customers book tables"),
    (CheckId::ReviewVisibility, "Customer reviews are invisible to AI agents"),
];

/// Unlocked transform: interpretive title plus an explanation conditioned
/// only on whether the check passed.
pub fn interpretation(check: &CheckResult) -> Insight {
    let passing = check.is_passing();
    match INTERPRETATIONS.iter().find(|entry| entry.id == check.id) {
        Some(entry) => Insight {
            title: entry.title.to_string(),
            explanation: if passing { entry.pass } else { entry.fail }.to_string(),
            status: check.status,
            locked: false,
        },
        None => fallback_interpretation(&check.name, passing, check.status),
    }
}

/// Locked transform: alarming teaser title, with the unlocked explanation
/// carried along for the blurred preview.
pub fn locked_insight(check: &CheckResult) -> Insight {
    let preview = interpretation(check);
    let title = LOCKED_TITLES
        .iter()
        .find(|(id, _)| *id == check.id)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| format!("AI interpretation gap: {}", check.name));

    Insight {
        title,
        explanation: preview.explanation,
        status: check.status,
        locked: true,
    }
}

fn fallback_interpretation(
    name: &str,
    passing: bool,
    status: crate::audit::domain::CheckStatus,
) -> Insight {
    Insight {
        title: format!("How AI interprets {}", name.to_lowercase()),
        explanation: format!(
            "AI {} properly interpret this aspect of your website.",
            if passing { "can" } else { "cannot" }
        ),
        status,
        locked: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::domain::CheckStatus;
    use crate::audit::rubric;
    use crate::audit::signals::SignalRecord;

    #[test]
    fn every_registered_check_has_interpretation_and_locked_copy() {
        let audit = rubric::evaluate(&SignalRecord::default());
        for check in &audit.details {
            assert!(
                INTERPRETATIONS.iter().any(|entry| entry.id == check.id),
                "missing interpretation text for {:?}",
                check.id
            );
            assert!(
                LOCKED_TITLES.iter().any(|(id, _)| *id == check.id),
                "missing locked title for {:?}",
                check.id
            );
        }
    }

    #[test]
    fn interpretation_switches_copy_on_status() {
        let mut check = CheckResult {
            id: CheckId::Title,
            name: CheckId::Title.display_name().to_string(),
            points: 10,
            max_points: 10,
            status: CheckStatus::Pass,
        };

        let passing = interpretation(&check);
        assert!(passing.explanation.contains("clearly communicates"));
        assert!(!passing.locked);

        check.status = CheckStatus::Fail;
        check.points = 0;
        let failing = interpretation(&check);
        assert_eq!(failing.title, passing.title);
        assert!(failing.explanation.contains("missing or unclear"));
    }

    #[test]
    fn warning_status_uses_failure_copy() {
        let check = CheckResult {
            id: CheckId::MetaDescription,
            name: CheckId::MetaDescription.display_name().to_string(),
            points: 5,
            max_points: 10,
            status: CheckStatus::Warning,
        };
        let insight = interpretation(&check);
        assert!(insight.explanation.contains("incomplete or inaccurate"));
    }

    #[test]
    fn locked_insight_keeps_preview_explanation() {
        let check = CheckResult {
            id: CheckId::OperatingHours,
            name: CheckId::OperatingHours.display_name().to_string(),
            points: 0,
            max_points: 10,
            status: CheckStatus::Fail,
        };
        let locked = locked_insight(&check);
        assert!(locked.locked);
        assert_eq!(locked.title, "AI does not know when you are open");
        assert_eq!(locked.explanation, interpretation(&check).explanation);
    }

    #[test]
    fn fallback_copy_is_deterministic_and_total() {
        let insight = fallback_interpretation("Custom Signal", false, CheckStatus::Fail);
        assert_eq!(insight.title, "How AI interprets custom signal");
        assert!(insight.explanation.contains("cannot"));
    }
}
