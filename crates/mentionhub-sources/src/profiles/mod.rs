//! Static per-platform configuration.
//!
//! Each platform contributes one [`PlatformProfile`]: URL templates used to
//! fill in links the upstream payload omits, and the vocabulary the
//! synthetic generator draws from. Adding a platform means adding a profile
//! here, not another adapter type.

mod facebook;
mod instagram;
mod linkedin;
mod twitter;

use std::sync::Arc;

use mentionhub_core::{Platform, Sentiment};

use crate::adapter::PlatformAdapter;
use crate::transport::MentionTransport;

/// A synthetic post body and the tone it was written in.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticTemplate {
    pub text: &'static str,
    pub tone: Sentiment,
}

#[derive(Debug, Clone, Copy)]
pub struct SyntheticAuthor {
    pub display_name: &'static str,
    pub handle: &'static str,
}

#[derive(Debug)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// `{handle}` and `{id}` are substituted.
    pub permalink_template: &'static str,
    /// `{handle}` is substituted.
    pub profile_url_template: &'static str,
    pub avatar_url_template: &'static str,
    pub templates: &'static [SyntheticTemplate],
    pub authors: &'static [SyntheticAuthor],
    /// Probability a synthetic mention carries a media attachment.
    pub media_probability: f64,
    /// Whether the platform reports a share/repost count.
    pub reports_shares: bool,
}

impl PlatformProfile {
    #[must_use]
    pub fn permalink(&self, handle: &str, id: &str) -> String {
        self.permalink_template
            .replace("{handle}", handle)
            .replace("{id}", id)
    }

    #[must_use]
    pub fn profile_url(&self, handle: &str) -> String {
        self.profile_url_template.replace("{handle}", handle)
    }

    #[must_use]
    pub fn avatar_url(&self, handle: &str) -> String {
        self.avatar_url_template.replace("{handle}", handle)
    }
}

static PROFILES: [&PlatformProfile; 4] = [
    &facebook::PROFILE,
    &instagram::PROFILE,
    &linkedin::PROFILE,
    &twitter::PROFILE,
];

/// Profile for `platform`.
#[must_use]
pub fn profile_for(platform: Platform) -> &'static PlatformProfile {
    match platform {
        Platform::Facebook => &facebook::PROFILE,
        Platform::Instagram => &instagram::PROFILE,
        Platform::Linkedin => &linkedin::PROFILE,
        Platform::Twitter => &twitter::PROFILE,
    }
}

/// One adapter per known platform, all sharing `transport`.
#[must_use]
pub fn default_adapters(transport: &Arc<dyn MentionTransport>) -> Vec<PlatformAdapter> {
    PROFILES
        .iter()
        .map(|profile| PlatformAdapter::new(*profile, Arc::clone(transport)))
        .collect()
}
