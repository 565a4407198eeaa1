//! Per-platform mention sources.
//!
//! Every platform is served by one generic [`PlatformAdapter`] parameterized
//! by a static [`PlatformProfile`] (URL templates, synthetic vocabulary) and a
//! [`MentionTransport`] that performs the actual upstream calls. Adapters gate
//! on credential expiry, validate upstream payloads, and stamp each mention
//! with a sentiment from the injected [`SentimentClassifier`].

pub mod adapter;
pub mod classifier;
pub mod error;
pub mod profiles;
pub mod synthetic;
pub mod transport;

pub use adapter::{PlatformAdapter, SourceAdapter};
pub use classifier::{classify_sentiment, KeywordClassifier, SentimentClassifier};
pub use error::{SourceError, SourceErrorKind, TransportError};
pub use profiles::{default_adapters, profile_for, PlatformProfile, SyntheticAuthor, SyntheticTemplate};
pub use transport::{
    HttpTransport, MentionTransport, OfflineTransport, RawAuthor, RawMedia, RawMention, RawProfile,
};
