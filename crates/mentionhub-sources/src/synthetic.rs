//! Synthetic mention generator.
//!
//! Used only when no platform is connected. Values are randomized; each
//! mention's sentiment is the tone its template was written in, which the
//! keyword classifier agrees with (see the profile tests).

use chrono::{Duration, Utc};
use mentionhub_core::{
    Author, Coordinates, Engagement, Location, MediaItem, MediaKind, Mention,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use uuid::Uuid;

use crate::profiles::PlatformProfile;

const LOOKBACK_SECONDS: i64 = 30 * 24 * 60 * 60;

/// `(city, country, latitude, longitude)`
const CITIES: &[(&str, &str, f64, f64)] = &[
    ("Bogotá", "Colombia", 4.711, -74.0721),
    ("Medellín", "Colombia", 6.2442, -75.5812),
    ("Mexico City", "Mexico", 19.4326, -99.1332),
    ("Madrid", "Spain", 40.4168, -3.7038),
    ("Buenos Aires", "Argentina", -34.6037, -58.3816),
    ("Lima", "Peru", -12.0464, -77.0428),
    ("Santiago", "Chile", -33.4489, -70.6693),
];

/// Generate `count` synthetic mentions for `profile`'s platform.
#[must_use]
pub fn generate_mentions(profile: &PlatformProfile, count: usize) -> Vec<Mention> {
    let mut rng = rand::rng();
    let now = Utc::now();

    (0..count)
        .filter_map(|_| {
            let template = profile.templates.choose(&mut rng)?;
            let author = profile.authors.choose(&mut rng)?;
            let id = format!("{}-syn-{}", profile.platform, Uuid::new_v4().simple());
            let occurred_at = now - Duration::seconds(rng.random_range(0..LOOKBACK_SECONDS));

            let engagement = Engagement {
                likes: rng.random_range(0..500),
                comments: rng.random_range(0..80),
                shares: profile
                    .reports_shares
                    .then(|| rng.random_range(0..120)),
            };

            let media = if rng.random_bool(profile.media_probability) {
                let kind = if rng.random_bool(0.2) {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                };
                vec![MediaItem {
                    kind,
                    url: format!("https://picsum.photos/seed/{id}/640/480"),
                }]
            } else {
                Vec::new()
            };

            let location = match rng.random_range(0..10) {
                0..=6 => CITIES.choose(&mut rng).map(|(city, country, lat, lon)| Location {
                    country: Some((*country).to_string()),
                    city: Some((*city).to_string()),
                    coordinates: Some(Coordinates {
                        latitude: *lat,
                        longitude: *lon,
                    }),
                }),
                7 => CITIES.choose(&mut rng).map(|(_, country, _, _)| Location {
                    country: Some((*country).to_string()),
                    city: None,
                    coordinates: None,
                }),
                _ => None,
            };

            Some(Mention {
                permalink: Some(profile.permalink(author.handle, &id)),
                author: Author {
                    id: author.handle.to_string(),
                    display_name: author.display_name.to_string(),
                    handle: Some(author.handle.to_string()),
                    profile_url: Some(profile.profile_url(author.handle)),
                    avatar_url: Some(profile.avatar_url(author.handle)),
                },
                id,
                platform: profile.platform,
                content: template.text.to_string(),
                occurred_at,
                engagement: Some(engagement),
                sentiment: template.tone,
                media,
                location,
            })
        })
        .collect()
}
