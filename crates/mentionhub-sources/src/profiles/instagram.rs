use mentionhub_core::{Platform, Sentiment};

use super::{PlatformProfile, SyntheticAuthor, SyntheticTemplate};

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Instagram,
    permalink_template: "https://www.instagram.com/p/{id}/",
    profile_url_template: "https://www.instagram.com/{handle}/",
    avatar_url_template: "https://unavatar.io/instagram/{handle}",
    templates: TEMPLATES,
    authors: AUTHORS,
    // Posts are media-first.
    media_probability: 0.9,
    reports_shares: false,
};

const TEMPLATES: &[SyntheticTemplate] = &[
    SyntheticTemplate {
        text: "Obsessed with these colors, absolutely stunning and fantastic vibes",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Happy Friday! Loving the new collection",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Best brunch spot in town, highly recommend",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "New drop coming this weekend, stay tuned",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Behind the scenes at today's photo shoot",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Morning coffee and a view of the city",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Not impressed, the quality is really poor for the price",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "Ordered twice and both times it arrived broken. So disappointing",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "Terrible filter choices, the colors look awful",
        tone: Sentiment::Negative,
    },
];

const AUTHORS: &[SyntheticAuthor] = &[
    SyntheticAuthor {
        display_name: "Valentina",
        handle: "vale.creates",
    },
    SyntheticAuthor {
        display_name: "Foodie Medellín",
        handle: "foodiemedellin",
    },
    SyntheticAuthor {
        display_name: "Sofía Herrera",
        handle: "sofiaherrera",
    },
];
