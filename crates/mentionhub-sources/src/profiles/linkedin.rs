use mentionhub_core::{Platform, Sentiment};

use super::{PlatformProfile, SyntheticAuthor, SyntheticTemplate};

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Linkedin,
    permalink_template: "https://www.linkedin.com/feed/update/urn:li:activity:{id}/",
    profile_url_template: "https://www.linkedin.com/in/{handle}/",
    avatar_url_template: "https://unavatar.io/linkedin/{handle}",
    templates: TEMPLATES,
    authors: AUTHORS,
    media_probability: 0.15,
    reports_shares: true,
};

const TEMPLATES: &[SyntheticTemplate] = &[
    SyntheticTemplate {
        text: "Proud to announce our partnership, an inspiring milestone for the team",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Brilliant keynote today, thank you for sharing such helpful insights",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Excited to join this impressive organization. Great culture!",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "We are hiring for several engineering roles in our Madrid office.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Sharing our quarterly report on industry trends.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Join our webinar next Tuesday on supply chain planning.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Disappointing response to the layoffs, poor handling of the situation",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "The recruiting process was a bad experience and felt like a complete failure",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "Angry about the broken promises made to employees",
        tone: Sentiment::Negative,
    },
];

const AUTHORS: &[SyntheticAuthor] = &[
    SyntheticAuthor {
        display_name: "Daniel Ortiz",
        handle: "daniel-ortiz",
    },
    SyntheticAuthor {
        display_name: "Paula Restrepo",
        handle: "paularestrepo",
    },
    SyntheticAuthor {
        display_name: "Industry Insights LATAM",
        handle: "industry-insights-latam",
    },
];
