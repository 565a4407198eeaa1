use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseModelError;

/// Social platforms a mention can originate from.
///
/// Variants are declared in name order so the derived `Ord` matches
/// lexicographic ordering of [`Platform::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
}

impl Platform {
    /// Every supported platform, in name order.
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Twitter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "twitter" | "x" => Ok(Platform::Twitter),
            _ => Err(ParseModelError::Platform(s.to_string())),
        }
    }
}

/// Coarse tone of a mention. Always derived, never taken from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = ParseModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseModelError::Sentiment(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub display_name: String,
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub country: Option<String>,
    pub city: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Display label used for location rankings: `"{city}, {country}"`, or
    /// just the city when no country is known. `None` without a city.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        let city = self.city.as_deref()?.trim();
        if city.is_empty() {
            return None;
        }
        match self.country.as_deref().map(str::trim) {
            Some(country) if !country.is_empty() => Some(format!("{city}, {country}")),
            _ => Some(city.to_string()),
        }
    }
}

/// One normalized social-media item about the tracked entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Unique per platform + upstream item.
    pub id: String,
    pub platform: Platform,
    pub author: Author,
    pub content: String,
    /// Source-reported creation time.
    pub occurred_at: DateTime<Utc>,
    pub permalink: Option<String>,
    pub engagement: Option<Engagement>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    pub location: Option<Location>,
}

/// Account-level summary for one platform connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub platform: Platform,
    pub id: String,
    pub display_name: String,
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub avatar_url: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub post_count: Option<u64>,
}

/// Access token for one platform, supplied per request by the credential store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCredential {
    pub platform: Platform,
    pub access_token: String,
    #[serde(default, alias = "expires_at")]
    pub expires_at_epoch_seconds: Option<i64>,
}

impl SourceCredential {
    #[must_use]
    pub fn new(platform: Platform, access_token: impl Into<String>, expires_at: Option<i64>) -> Self {
        Self {
            platform,
            access_token: access_token.into(),
            expires_at_epoch_seconds: expires_at,
        }
    }
}

impl std::fmt::Debug for SourceCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceCredential")
            .field("platform", &self.platform)
            .field("access_token", &"[redacted]")
            .field("expires_at_epoch_seconds", &self.expires_at_epoch_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parse_is_case_insensitive() {
        assert_eq!("Twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!(" LINKEDIN ".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Twitter);
    }

    #[test]
    fn platform_parse_rejects_unknown() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert_eq!(err, ParseModelError::Platform("myspace".to_string()));
    }

    #[test]
    fn platform_order_matches_name_order() {
        let mut names: Vec<&str> = Platform::ALL.iter().map(|p| p.as_str()).collect();
        let declared = names.clone();
        names.sort_unstable();
        assert_eq!(names, declared);
    }

    #[test]
    fn sentiment_round_trips_through_display() {
        for sentiment in Sentiment::ALL {
            assert_eq!(sentiment.to_string().parse::<Sentiment>().unwrap(), sentiment);
        }
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }

    #[test]
    fn location_label_with_city_and_country() {
        let location = Location {
            country: Some("Colombia".to_string()),
            city: Some("Bogotá".to_string()),
            coordinates: None,
        };
        assert_eq!(location.label().as_deref(), Some("Bogotá, Colombia"));
    }

    #[test]
    fn location_label_city_only() {
        let location = Location {
            country: None,
            city: Some("Lima".to_string()),
            coordinates: None,
        };
        assert_eq!(location.label().as_deref(), Some("Lima"));
    }

    #[test]
    fn location_label_requires_city() {
        let location = Location {
            country: Some("Peru".to_string()),
            city: Some("  ".to_string()),
            coordinates: None,
        };
        assert!(location.label().is_none());
    }

    #[test]
    fn credential_debug_redacts_token() {
        let credential = SourceCredential::new(Platform::Facebook, "secret-token", Some(10));
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("[redacted]"));
    }
}
