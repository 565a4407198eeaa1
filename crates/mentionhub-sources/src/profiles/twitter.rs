use mentionhub_core::{Platform, Sentiment};

use super::{PlatformProfile, SyntheticAuthor, SyntheticTemplate};

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Twitter,
    permalink_template: "https://twitter.com/{handle}/status/{id}",
    profile_url_template: "https://twitter.com/{handle}",
    avatar_url_template: "https://unavatar.io/twitter/{handle}",
    templates: TEMPLATES,
    authors: AUTHORS,
    media_probability: 0.25,
    reports_shares: true,
};

const TEMPLATES: &[SyntheticTemplate] = &[
    SyntheticTemplate {
        text: "Absolutely love the new release, great work by the whole team!",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Best customer support I've had all year. Highly recommend.",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Huge congrats on the launch, this is amazing",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Anyone tried the new update yet? Curious how it compares.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Spotted their booth at the expo this morning.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Reading the latest announcement from the team, details in thread.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Worst experience ever, the app is broken again",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "Really disappointed with the support, still no answer after a week",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "This is a scam. Terrible service and rude staff.",
        tone: Sentiment::Negative,
    },
];

const AUTHORS: &[SyntheticAuthor] = &[
    SyntheticAuthor {
        display_name: "Camila Rojas",
        handle: "camirojas",
    },
    SyntheticAuthor {
        display_name: "Tech Daily",
        handle: "techdaily",
    },
    SyntheticAuthor {
        display_name: "Andrés Gómez",
        handle: "andresgz",
    },
    SyntheticAuthor {
        display_name: "Laura Méndez",
        handle: "lauramendez",
    },
];
