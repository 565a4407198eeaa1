//! The source adapter contract and its generic implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mentionhub_core::{
    is_usable_now, Author, Engagement, MediaItem, MediaKind, Mention, Platform, ProfileSummary,
    SourceCredential,
};

use crate::classifier::{KeywordClassifier, SentimentClassifier};
use crate::error::SourceError;
use crate::profiles::PlatformProfile;
use crate::synthetic::generate_mentions;
use crate::transport::{MentionTransport, RawMedia, RawMention, RawProfile};

/// One platform's fetch and synthetic-generation capability.
///
/// Implementations must gate on credential expiry before any upstream call
/// and must stamp every returned mention with a classified sentiment.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    fn platform(&self) -> Platform;

    /// Fetch at most `max_count` mentions.
    ///
    /// # Errors
    ///
    /// [`SourceError::ExpiredCredential`] if the credential fails the gate
    /// (no call is attempted); [`SourceError::UpstreamFailure`] on transport
    /// or payload errors.
    async fn fetch_mentions(
        &self,
        credential: &SourceCredential,
        max_count: usize,
    ) -> Result<Vec<Mention>, SourceError>;

    /// Fetch the connected account's profile summary.
    ///
    /// # Errors
    ///
    /// Same as [`SourceAdapter::fetch_mentions`].
    async fn fetch_profile(&self, credential: &SourceCredential)
        -> Result<ProfileSummary, SourceError>;

    /// Fabricate `count` mentions. Only for platforms without a usable credential.
    fn generate_synthetic(&self, count: usize) -> Vec<Mention>;
}

/// [`SourceAdapter`] driven by a [`PlatformProfile`] and a [`MentionTransport`].
pub struct PlatformAdapter {
    profile: &'static PlatformProfile,
    transport: Arc<dyn MentionTransport>,
    classifier: Arc<dyn SentimentClassifier>,
}

impl PlatformAdapter {
    /// Adapter using the default [`KeywordClassifier`].
    #[must_use]
    pub fn new(profile: &'static PlatformProfile, transport: Arc<dyn MentionTransport>) -> Self {
        Self {
            profile,
            transport,
            classifier: Arc::new(KeywordClassifier),
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn profile(&self) -> &'static PlatformProfile {
        self.profile
    }

    fn gate(&self, credential: &SourceCredential) -> Result<(), SourceError> {
        // A token issued for another platform is as unusable as an expired one.
        if credential.platform != self.profile.platform || !is_usable_now(credential) {
            return Err(SourceError::ExpiredCredential {
                platform: self.profile.platform,
            });
        }
        Ok(())
    }

    fn normalize_mention(&self, raw: RawMention) -> Result<Mention, SourceError> {
        let platform = self.profile.platform;

        let id = raw.id.trim().to_string();
        if id.is_empty() {
            return Err(SourceError::upstream(
                platform,
                "malformed payload: mention without an id",
            ));
        }

        let occurred_at = DateTime::parse_from_rfc3339(raw.created_at.trim())
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| {
                SourceError::upstream(
                    platform,
                    format!(
                        "malformed payload: mention {id} has unparseable created_at '{}': {e}",
                        raw.created_at
                    ),
                )
            })?;

        let handle = non_blank(raw.author.handle);
        let author_id = non_blank(Some(raw.author.id))
            .or_else(|| handle.clone())
            .unwrap_or_else(|| "unknown".to_string());
        let display_name = non_blank(raw.author.display_name)
            .or_else(|| handle.clone())
            .unwrap_or_else(|| author_id.clone());

        let author = Author {
            id: author_id,
            display_name,
            profile_url: non_blank(raw.author.profile_url)
                .or_else(|| handle.as_deref().map(|h| self.profile.profile_url(h))),
            avatar_url: non_blank(raw.author.avatar_url),
            handle,
        };

        let permalink = non_blank(raw.permalink).or_else(|| {
            author
                .handle
                .as_deref()
                .map(|h| self.profile.permalink(h, &id))
        });

        let engagement = if raw.likes.is_some() || raw.comments.is_some() || raw.shares.is_some() {
            Some(Engagement {
                likes: raw.likes.unwrap_or(0),
                comments: raw.comments.unwrap_or(0),
                shares: raw.shares,
            })
        } else {
            None
        };

        let media = raw.media.into_iter().filter_map(media_item).collect();
        let sentiment = self.classifier.classify(&raw.content);

        Ok(Mention {
            id,
            platform,
            author,
            content: raw.content,
            occurred_at,
            permalink,
            engagement,
            sentiment,
            media,
            location: raw.location,
        })
    }

    fn normalize_profile(&self, raw: RawProfile) -> ProfileSummary {
        let handle = non_blank(raw.handle);
        let id = non_blank(Some(raw.id))
            .or_else(|| handle.clone())
            .unwrap_or_else(|| format!("{}-account", self.profile.platform));
        ProfileSummary {
            platform: self.profile.platform,
            display_name: non_blank(raw.display_name)
                .or_else(|| handle.clone())
                .unwrap_or_else(|| id.clone()),
            profile_url: non_blank(raw.profile_url)
                .or_else(|| handle.as_deref().map(|h| self.profile.profile_url(h))),
            avatar_url: non_blank(raw.avatar_url),
            followers: raw.followers,
            following: raw.following,
            post_count: raw.post_count,
            handle,
            id,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn media_item(raw: RawMedia) -> Option<MediaItem> {
    let kind = match raw.kind.trim().to_lowercase().as_str() {
        "image" | "photo" => MediaKind::Image,
        "video" => MediaKind::Video,
        other => {
            tracing::debug!(kind = other, url = %raw.url, "dropping unsupported media kind");
            return None;
        }
    };
    Some(MediaItem { kind, url: raw.url })
}

#[async_trait]
impl SourceAdapter for PlatformAdapter {
    fn platform(&self) -> Platform {
        self.profile.platform
    }

    async fn fetch_mentions(
        &self,
        credential: &SourceCredential,
        max_count: usize,
    ) -> Result<Vec<Mention>, SourceError> {
        self.gate(credential)?;
        if max_count == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .transport
            .fetch_mentions(self.profile.platform, credential, max_count)
            .await?;

        raw.into_iter()
            .take(max_count)
            .map(|item| self.normalize_mention(item))
            .collect()
    }

    async fn fetch_profile(
        &self,
        credential: &SourceCredential,
    ) -> Result<ProfileSummary, SourceError> {
        self.gate(credential)?;
        let raw = self
            .transport
            .fetch_profile(self.profile.platform, credential)
            .await?;
        Ok(self.normalize_profile(raw))
    }

    fn generate_synthetic(&self, count: usize) -> Vec<Mention> {
        generate_mentions(self.profile, count)
    }
}

#[cfg(test)]
#[path = "adapter_test.rs"]
mod tests;
