//! Upstream transports.
//!
//! A transport fetches raw, unvalidated items for a platform. It knows
//! nothing about sentiment or expiry; [`crate::PlatformAdapter`] gates,
//! validates, and normalizes what a transport returns.

mod http;
mod offline;

pub use http::HttpTransport;
pub use offline::OfflineTransport;

use async_trait::async_trait;
use mentionhub_core::{Location, Platform, SourceCredential};
use serde::Deserialize;

use crate::error::SourceError;

/// Per-platform network capability behind the adapter boundary.
#[async_trait]
pub trait MentionTransport: Send + Sync {
    /// Fetch up to `limit` raw mentions for `platform`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UpstreamFailure`] on transport or payload errors.
    async fn fetch_mentions(
        &self,
        platform: Platform,
        credential: &SourceCredential,
        limit: usize,
    ) -> Result<Vec<RawMention>, SourceError>;

    /// Fetch the connected account's profile for `platform`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UpstreamFailure`] on transport or payload errors.
    async fn fetch_profile(
        &self,
        platform: Platform,
        credential: &SourceCredential,
    ) -> Result<RawProfile, SourceError>;
}

/// A mention as delivered upstream, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMention {
    #[serde(default)]
    pub id: String,
    pub author: RawAuthor,
    #[serde(alias = "text", default)]
    pub content: String,
    /// RFC 3339 timestamp; parsed during validation.
    #[serde(alias = "createdAt")]
    pub created_at: String,
    pub permalink: Option<String>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub shares: Option<u64>,
    #[serde(default)]
    pub media: Vec<RawMedia>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub id: String,
    #[serde(alias = "name")]
    pub display_name: Option<String>,
    #[serde(alias = "username")]
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMedia {
    /// `image`, `photo`, or `video`; anything else is dropped.
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub id: String,
    #[serde(alias = "name")]
    pub display_name: Option<String>,
    #[serde(alias = "username")]
    pub handle: Option<String>,
    pub profile_url: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(alias = "followers_count")]
    pub followers: Option<u64>,
    #[serde(alias = "following_count")]
    pub following: Option<u64>,
    #[serde(alias = "posts_count")]
    pub post_count: Option<u64>,
}
