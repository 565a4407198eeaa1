//! Fan-out over enabled sources and merge into one time-ordered result.
//!
//! Each enabled platform is fetched as an independent future bounded by a
//! per-call timeout; the futures run concurrently through a bounded
//! `buffer_unordered` stream and each yields its own `(platform, Result)`.
//! Only the join step below touches the merged collections. Dropping the
//! future returned by [`Aggregator::aggregate`] cancels every in-flight call.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use mentionhub_core::{AppConfig, Mention, Platform, ProfileSummary, SourceCredential};
use mentionhub_sources::{
    default_adapters, HttpTransport, MentionTransport, OfflineTransport, SourceAdapter,
    SourceError, SourceErrorKind, TransportError,
};
use serde::Serialize;

use crate::provider::{CredentialProvider, PlatformEnablement};

/// One platform's failure, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub platform: Platform,
    pub kind: SourceErrorKind,
    pub message: String,
}

impl From<SourceError> for SourceFailure {
    fn from(err: SourceError) -> Self {
        Self {
            platform: err.platform(),
            kind: err.kind(),
            message: err.message(),
        }
    }
}

/// Merged output of one aggregation call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregationResult {
    /// Sorted by `occurred_at` descending, then platform name, then id.
    pub mentions: Vec<Mention>,
    /// One entry per failed platform, ordered by platform name.
    pub errors: Vec<SourceFailure>,
    /// `true` when the mentions were fabricated because no platform is enabled.
    pub synthetic: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilesResult {
    /// Ordered by platform name.
    pub profiles: Vec<ProfileSummary>,
    pub errors: Vec<SourceFailure>,
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Upper bound on each adapter call. Expiry is reported as an upstream failure.
    pub source_timeout: Duration,
    pub max_concurrent_sources: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(10),
            max_concurrent_sources: 4,
        }
    }
}

impl From<&AppConfig> for AggregatorConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            source_timeout: Duration::from_millis(config.source_timeout_ms),
            max_concurrent_sources: config.max_concurrent_sources.max(1),
        }
    }
}

pub struct Aggregator {
    adapters: Vec<Arc<dyn SourceAdapter>>,
    config: AggregatorConfig,
}

impl Aggregator {
    #[must_use]
    pub fn new(adapters: Vec<Arc<dyn SourceAdapter>>, config: AggregatorConfig) -> Self {
        Self { adapters, config }
    }

    /// Build an aggregator with one adapter per platform, talking to the
    /// configured feed gateway or, when none is set, the offline transport.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP transport cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, TransportError> {
        let transport: Arc<dyn MentionTransport> = match &config.feed_base_url {
            Some(base_url) => Arc::new(
                HttpTransport::new(base_url, config.source_timeout_ms, &config.user_agent)?
                    .with_tracked_entity(config.tracked_entity.clone()),
            ),
            None => {
                tracing::info!("no feed gateway configured; sources will return no live mentions");
                Arc::new(OfflineTransport)
            }
        };

        let adapters = default_adapters(&transport)
            .into_iter()
            .map(|adapter| Arc::new(adapter) as Arc<dyn SourceAdapter>)
            .collect();

        Ok(Self::new(adapters, AggregatorConfig::from(config)))
    }

    /// Platforms with a registered adapter.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        self.adapters.iter().map(|a| a.platform()).collect()
    }

    fn adapter_for(&self, platform: Platform) -> Option<&Arc<dyn SourceAdapter>> {
        self.adapters.iter().find(|a| a.platform() == platform)
    }

    /// Aggregate mentions from every enabled platform.
    ///
    /// With no enabled platforms, every adapter generates
    /// `max_per_platform / adapter_count` synthetic mentions instead and the
    /// result is flagged `synthetic`. An enabled platform with no credential
    /// is reported as an expired credential. Never fails: sources that error
    /// or time out contribute one entry to `errors` and no mentions.
    pub async fn aggregate<C>(
        &self,
        enabled: &BTreeSet<Platform>,
        credentials: &C,
        max_per_platform: usize,
    ) -> AggregationResult
    where
        C: CredentialProvider + ?Sized,
    {
        if enabled.is_empty() {
            return self.synthetic(max_per_platform);
        }

        let outcomes = self
            .fan_out(enabled, credentials, |adapter, credential| async move {
                adapter.fetch_mentions(&credential, max_per_platform).await
            })
            .await;

        let mut mentions = Vec::new();
        let mut errors = Vec::new();
        for (platform, outcome) in outcomes {
            match outcome {
                Ok(batch) => {
                    tracing::debug!(%platform, count = batch.len(), "collected mentions");
                    mentions.extend(batch);
                }
                Err(err) => {
                    tracing::warn!(%platform, error = %err, "source failed");
                    errors.push(SourceFailure::from(err));
                }
            }
        }

        sort_mentions(&mut mentions);
        errors.sort_by_key(|e| e.platform);

        AggregationResult {
            mentions,
            errors,
            synthetic: false,
        }
    }

    /// [`Aggregator::aggregate`] driven by an account's enablement and credentials.
    pub async fn aggregate_account<A>(&self, account: &A, max_per_platform: usize) -> AggregationResult
    where
        A: CredentialProvider + PlatformEnablement + ?Sized,
    {
        let enabled = account.enabled_platforms();
        self.aggregate(&enabled, account, max_per_platform).await
    }

    /// Fetch profile summaries for every enabled platform, with the same
    /// gating, timeout, and failure collection as [`Aggregator::aggregate`].
    pub async fn fetch_profiles<C>(&self, enabled: &BTreeSet<Platform>, credentials: &C) -> ProfilesResult
    where
        C: CredentialProvider + ?Sized,
    {
        let outcomes = self
            .fan_out(enabled, credentials, |adapter, credential| async move {
                adapter.fetch_profile(&credential).await
            })
            .await;

        let mut profiles = Vec::new();
        let mut errors = Vec::new();
        for (platform, outcome) in outcomes {
            match outcome {
                Ok(profile) => profiles.push(profile),
                Err(err) => {
                    tracing::warn!(%platform, error = %err, "profile fetch failed");
                    errors.push(SourceFailure::from(err));
                }
            }
        }

        profiles.sort_by_key(|p| p.platform);
        errors.sort_by_key(|e| e.platform);
        ProfilesResult { profiles, errors }
    }

    fn synthetic(&self, max_per_platform: usize) -> AggregationResult {
        let per_adapter = max_per_platform / self.adapters.len().max(1);
        tracing::info!(
            adapters = self.adapters.len(),
            per_adapter,
            "no platforms enabled; generating synthetic mentions"
        );

        let mut mentions: Vec<Mention> = self
            .adapters
            .iter()
            .flat_map(|adapter| adapter.generate_synthetic(per_adapter))
            .collect();
        sort_mentions(&mut mentions);

        AggregationResult {
            mentions,
            errors: Vec::new(),
            synthetic: true,
        }
    }

    /// Run `op` once per enabled platform that has an adapter, concurrently,
    /// each bounded by the configured timeout.
    async fn fan_out<C, T, F, Fut>(
        &self,
        enabled: &BTreeSet<Platform>,
        credentials: &C,
        op: F,
    ) -> Vec<(Platform, Result<T, SourceError>)>
    where
        C: CredentialProvider + ?Sized,
        F: Fn(Arc<dyn SourceAdapter>, SourceCredential) -> Fut,
        Fut: Future<Output = Result<T, SourceError>>,
    {
        let timeout = self.config.source_timeout;

        let jobs: Vec<(Platform, Arc<dyn SourceAdapter>, Option<SourceCredential>)> = enabled
            .iter()
            .filter_map(|&platform| match self.adapter_for(platform) {
                Some(adapter) => Some((platform, Arc::clone(adapter), credentials.credential(platform))),
                None => {
                    tracing::warn!(%platform, "platform enabled but no adapter registered; skipping");
                    None
                }
            })
            .collect();

        stream::iter(jobs)
            .map(|(platform, adapter, credential)| {
                let call = credential.map(|credential| op(adapter, credential));
                async move {
                    let Some(call) = call else {
                        tracing::debug!(%platform, "no credential for enabled platform");
                        return (platform, Err(SourceError::ExpiredCredential { platform }));
                    };
                    let result = match tokio::time::timeout(timeout, call).await {
                        Ok(result) => result,
                        Err(_) => Err(SourceError::upstream(
                            platform,
                            format!("timed out after {} ms", timeout.as_millis()),
                        )),
                    };
                    (platform, result)
                }
            })
            .buffer_unordered(self.config.max_concurrent_sources.max(1))
            .collect()
            .await
    }
}

/// Sort newest first; equal timestamps order by platform name, then id.
pub fn sort_mentions(mentions: &mut [Mention]) {
    mentions.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| a.platform.as_str().cmp(b.platform.as_str()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
