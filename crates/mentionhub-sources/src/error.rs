use mentionhub_core::Platform;
use serde::Serialize;
use thiserror::Error;

/// Failure category reported alongside each per-platform error record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    ExpiredCredential,
    UpstreamFailure,
}

/// Errors a source adapter can return. Both variants are local to one
/// platform; the aggregator records them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The credential was absent or expired; no upstream call was made.
    #[error("{platform} credential is missing or expired")]
    ExpiredCredential { platform: Platform },

    /// Transport error, non-success status, timeout, or malformed payload.
    #[error("{platform} upstream failure: {message}")]
    UpstreamFailure { platform: Platform, message: String },
}

impl SourceError {
    pub fn upstream(platform: Platform, message: impl Into<String>) -> Self {
        SourceError::UpstreamFailure {
            platform,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        match self {
            SourceError::ExpiredCredential { platform }
            | SourceError::UpstreamFailure { platform, .. } => *platform,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::ExpiredCredential { .. } => SourceErrorKind::ExpiredCredential,
            SourceError::UpstreamFailure { .. } => SourceErrorKind::UpstreamFailure,
        }
    }

    /// Human-readable message without the platform prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            SourceError::ExpiredCredential { .. } => "credential is missing or expired".to_string(),
            SourceError::UpstreamFailure { message, .. } => message.clone(),
        }
    }
}

/// Errors building a transport. Never surfaced per request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_credential_accessors() {
        let err = SourceError::ExpiredCredential {
            platform: Platform::Instagram,
        };
        assert_eq!(err.platform(), Platform::Instagram);
        assert_eq!(err.kind(), SourceErrorKind::ExpiredCredential);
        assert_eq!(err.to_string(), "instagram credential is missing or expired");
    }

    #[test]
    fn upstream_failure_message_omits_platform() {
        let err = SourceError::upstream(Platform::Twitter, "request timed out");
        assert_eq!(err.kind(), SourceErrorKind::UpstreamFailure);
        assert_eq!(err.message(), "request timed out");
        assert_eq!(err.to_string(), "twitter upstream failure: request timed out");
    }
}
