use mentionhub_core::{Platform, Sentiment};

use super::{PlatformProfile, SyntheticAuthor, SyntheticTemplate};

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Facebook,
    permalink_template: "https://www.facebook.com/{handle}/posts/{id}",
    profile_url_template: "https://www.facebook.com/{handle}",
    avatar_url_template: "https://graph.facebook.com/{handle}/picture",
    templates: TEMPLATES,
    authors: AUTHORS,
    media_probability: 0.35,
    reports_shares: true,
};

const TEMPLATES: &[SyntheticTemplate] = &[
    SyntheticTemplate {
        text: "We had a wonderful time at the event, thank you for organizing it!",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "So proud to be part of this community. Great initiative!",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Excellent service from start to finish, very helpful staff.",
        tone: Sentiment::Positive,
    },
    SyntheticTemplate {
        text: "Does anyone know the opening hours for the downtown store?",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Shared a post about the upcoming community meetup.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Looking forward to more information about the new program.",
        tone: Sentiment::Neutral,
    },
    SyntheticTemplate {
        text: "Awful experience with the delivery, the package arrived broken.",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "I hate how long it takes to get a reply. Very poor communication.",
        tone: Sentiment::Negative,
    },
    SyntheticTemplate {
        text: "Another problem with my order and nobody seems to care. Useless.",
        tone: Sentiment::Negative,
    },
];

const AUTHORS: &[SyntheticAuthor] = &[
    SyntheticAuthor {
        display_name: "María Fernanda López",
        handle: "mariafer.lopez",
    },
    SyntheticAuthor {
        display_name: "Barrio Unido",
        handle: "barriounido",
    },
    SyntheticAuthor {
        display_name: "Jorge Castillo",
        handle: "jorge.castillo",
    },
];
