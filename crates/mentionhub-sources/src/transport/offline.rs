use async_trait::async_trait;
use mentionhub_core::{Platform, SourceCredential};

use super::{MentionTransport, RawMention, RawProfile};
use crate::error::SourceError;

/// Transport used when no feed gateway is configured.
///
/// Returns no mentions and a placeholder profile, so a usable credential
/// yields an empty (not failed) source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait]
impl MentionTransport for OfflineTransport {
    async fn fetch_mentions(
        &self,
        platform: Platform,
        _credential: &SourceCredential,
        _limit: usize,
    ) -> Result<Vec<RawMention>, SourceError> {
        tracing::debug!(%platform, "offline transport: no feed gateway configured");
        Ok(Vec::new())
    }

    async fn fetch_profile(
        &self,
        platform: Platform,
        _credential: &SourceCredential,
    ) -> Result<RawProfile, SourceError> {
        Ok(RawProfile {
            id: format!("{platform}-account"),
            display_name: Some(format!("{platform} account")),
            handle: None,
            profile_url: None,
            avatar_url: None,
            followers: None,
            following: None,
            post_count: None,
        })
    }
}
