//! JSON feed gateway client.
//!
//! The gateway exposes one pair of endpoints per platform:
//!
//! - `GET {base}/{platform}/mentions?limit=N[&q=entity]` → `{"data": [RawMention]}`
//! - `GET {base}/{platform}/profile` → `{"data": RawProfile}`
//!
//! Requests carry the platform credential as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use mentionhub_core::{Platform, SourceCredential};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{MentionTransport, RawMention, RawProfile};
use crate::error::{SourceError, TransportError};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Feed gateway transport over `reqwest`.
///
/// Use [`HttpTransport::new`] with the configured gateway URL; tests point it
/// at a wiremock server.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    tracked_entity: Option<String>,
}

impl HttpTransport {
    /// Build a transport for the gateway at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`TransportError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn new(base_url: &str, timeout_ms: u64, user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .connect_timeout(Duration::from_millis(timeout_ms.min(10_000)))
            .user_agent(user_agent)
            .build()?;

        // Trailing slash so `join` appends rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| TransportError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            tracked_entity: None,
        })
    }

    /// Send `entity` as the `q` search parameter on mention requests.
    #[must_use]
    pub fn with_tracked_entity(mut self, entity: Option<String>) -> Self {
        self.tracked_entity = entity;
        self
    }

    fn endpoint(&self, platform: Platform, leaf: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(&format!("{platform}/{leaf}"))
            .map_err(|e| SourceError::upstream(platform, format!("invalid endpoint URL: {e}")))
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        platform: Platform,
        url: Url,
        credential: &SourceCredential,
    ) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&credential.access_token)
            .send()
            .await
            .map_err(|e| SourceError::upstream(platform, describe_reqwest_error(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::upstream(
                platform,
                format!("gateway returned status {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::upstream(platform, describe_reqwest_error(&e)))?;

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| SourceError::upstream(platform, format!("malformed payload: {e}")))?;

        Ok(envelope.data)
    }
}

fn describe_reqwest_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else {
        format!("transport error: {err}")
    }
}

#[async_trait]
impl MentionTransport for HttpTransport {
    async fn fetch_mentions(
        &self,
        platform: Platform,
        credential: &SourceCredential,
        limit: usize,
    ) -> Result<Vec<RawMention>, SourceError> {
        let mut url = self.endpoint(platform, "mentions")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            if let Some(entity) = &self.tracked_entity {
                query.append_pair("q", entity);
            }
        }

        let mentions: Vec<RawMention> = self.get_data(platform, url, credential).await?;
        tracing::debug!(%platform, count = mentions.len(), "fetched raw mentions from gateway");
        Ok(mentions)
    }

    async fn fetch_profile(
        &self,
        platform: Platform,
        credential: &SourceCredential,
    ) -> Result<RawProfile, SourceError> {
        let url = self.endpoint(platform, "profile")?;
        self.get_data(platform, url, credential).await
    }
}
