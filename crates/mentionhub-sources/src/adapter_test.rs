use std::sync::atomic::{AtomicUsize, Ordering};

use mentionhub_core::{Location, Sentiment};

use super::*;
use crate::profiles::profile_for;
use crate::transport::RawAuthor;

/// Transport returning canned items and counting calls.
struct FakeTransport {
    mentions: Vec<RawMention>,
    calls: AtomicUsize,
}

impl FakeTransport {
    fn new(mentions: Vec<RawMention>) -> Arc<Self> {
        Arc::new(Self {
            mentions,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MentionTransport for FakeTransport {
    async fn fetch_mentions(
        &self,
        _platform: Platform,
        _credential: &SourceCredential,
        _limit: usize,
    ) -> Result<Vec<RawMention>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.mentions.clone())
    }

    async fn fetch_profile(
        &self,
        _platform: Platform,
        _credential: &SourceCredential,
    ) -> Result<RawProfile, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawProfile {
            id: "42".to_string(),
            display_name: None,
            handle: Some("acme".to_string()),
            profile_url: None,
            avatar_url: None,
            followers: Some(1_200),
            following: Some(30),
            post_count: None,
        })
    }
}

fn raw(id: &str, content: &str, created_at: &str) -> RawMention {
    RawMention {
        id: id.to_string(),
        author: RawAuthor {
            id: "u1".to_string(),
            display_name: Some("Ana Ruiz".to_string()),
            handle: Some("anaruiz".to_string()),
            profile_url: None,
            avatar_url: None,
        },
        content: content.to_string(),
        created_at: created_at.to_string(),
        permalink: None,
        likes: None,
        comments: None,
        shares: None,
        media: Vec::new(),
        location: None,
    }
}

fn live_credential(platform: Platform) -> SourceCredential {
    SourceCredential::new(platform, "token", Some(Utc::now().timestamp() + 3_600))
}

fn adapter(platform: Platform, transport: Arc<FakeTransport>) -> PlatformAdapter {
    PlatformAdapter::new(profile_for(platform), transport)
}

#[tokio::test]
async fn expired_credential_short_circuits_without_call() {
    let transport = FakeTransport::new(vec![raw("1", "hello", "2024-01-01T00:00:00Z")]);
    let adapter = adapter(Platform::Twitter, Arc::clone(&transport));
    let credential = SourceCredential::new(Platform::Twitter, "token", Some(1));

    let err = adapter.fetch_mentions(&credential, 10).await.unwrap_err();
    assert_eq!(
        err,
        SourceError::ExpiredCredential {
            platform: Platform::Twitter
        }
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn credential_without_expiry_is_rejected() {
    let transport = FakeTransport::new(Vec::new());
    let adapter = adapter(Platform::Facebook, Arc::clone(&transport));
    let credential = SourceCredential::new(Platform::Facebook, "token", None);

    let err = adapter.fetch_profile(&credential).await.unwrap_err();
    assert_eq!(err.kind(), crate::SourceErrorKind::ExpiredCredential);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn credential_for_other_platform_is_rejected() {
    let transport = FakeTransport::new(Vec::new());
    let adapter = adapter(Platform::Facebook, Arc::clone(&transport));

    let err = adapter
        .fetch_mentions(&live_credential(Platform::Twitter), 5)
        .await
        .unwrap_err();
    assert_eq!(err.platform(), Platform::Facebook);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn zero_max_count_returns_empty_without_call() {
    let transport = FakeTransport::new(vec![raw("1", "hello", "2024-01-01T00:00:00Z")]);
    let adapter = adapter(Platform::Twitter, Arc::clone(&transport));

    let mentions = adapter
        .fetch_mentions(&live_credential(Platform::Twitter), 0)
        .await
        .unwrap();
    assert!(mentions.is_empty());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn truncates_to_max_count_and_classifies() {
    let transport = FakeTransport::new(vec![
        raw("1", "I love this", "2024-01-01T00:00:00Z"),
        raw("2", "This is terrible", "2024-01-02T00:00:00Z"),
        raw("3", "Just a post", "2024-01-03T00:00:00Z"),
    ]);
    let adapter = adapter(Platform::Twitter, transport);

    let mentions = adapter
        .fetch_mentions(&live_credential(Platform::Twitter), 2)
        .await
        .unwrap();
    assert_eq!(mentions.len(), 2);
    assert_eq!(mentions[0].sentiment, Sentiment::Positive);
    assert_eq!(mentions[1].sentiment, Sentiment::Negative);
    assert!(mentions.iter().all(|m| m.platform == Platform::Twitter));
}

#[tokio::test]
async fn fills_permalink_and_profile_url_from_templates() {
    let transport = FakeTransport::new(vec![raw("99", "hello", "2024-01-01T12:30:00+02:00")]);
    let adapter = adapter(Platform::Twitter, transport);

    let mention = adapter
        .fetch_mentions(&live_credential(Platform::Twitter), 5)
        .await
        .unwrap()
        .remove(0);
    assert_eq!(
        mention.permalink.as_deref(),
        Some("https://twitter.com/anaruiz/status/99")
    );
    assert_eq!(
        mention.author.profile_url.as_deref(),
        Some("https://twitter.com/anaruiz")
    );
    assert_eq!(mention.occurred_at.to_rfc3339(), "2024-01-01T10:30:00+00:00");
    assert!(mention.engagement.is_none());
}

#[tokio::test]
async fn unparseable_timestamp_is_upstream_failure() {
    let transport = FakeTransport::new(vec![
        raw("1", "fine", "2024-01-01T00:00:00Z"),
        raw("2", "broken clock", "yesterday"),
    ]);
    let adapter = adapter(Platform::Instagram, transport);

    let err = adapter
        .fetch_mentions(&live_credential(Platform::Instagram), 10)
        .await
        .unwrap_err();
    match err {
        SourceError::UpstreamFailure { platform, message } => {
            assert_eq!(platform, Platform::Instagram);
            assert!(message.contains("unparseable created_at"), "{message}");
        }
        other => panic!("expected UpstreamFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_id_is_upstream_failure() {
    let transport = FakeTransport::new(vec![raw("  ", "no id", "2024-01-01T00:00:00Z")]);
    let adapter = adapter(Platform::Linkedin, transport);

    let err = adapter
        .fetch_mentions(&live_credential(Platform::Linkedin), 10)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), crate::SourceErrorKind::UpstreamFailure);
}

#[tokio::test]
async fn engagement_media_and_location_are_normalized() {
    let mut item = raw("7", "look", "2024-03-01T00:00:00Z");
    item.likes = Some(10);
    item.shares = Some(2);
    item.media = vec![
        RawMedia {
            kind: "photo".to_string(),
            url: "https://img.example/a.jpg".to_string(),
        },
        RawMedia {
            kind: "gif".to_string(),
            url: "https://img.example/b.gif".to_string(),
        },
        RawMedia {
            kind: "Video".to_string(),
            url: "https://img.example/c.mp4".to_string(),
        },
    ];
    item.location = Some(Location {
        country: Some("Colombia".to_string()),
        city: Some("Bogotá".to_string()),
        coordinates: None,
    });
    let adapter = adapter(Platform::Facebook, FakeTransport::new(vec![item]));

    let mention = adapter
        .fetch_mentions(&live_credential(Platform::Facebook), 1)
        .await
        .unwrap()
        .remove(0);
    assert_eq!(
        mention.engagement,
        Some(Engagement {
            likes: 10,
            comments: 0,
            shares: Some(2)
        })
    );
    let kinds: Vec<MediaKind> = mention.media.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Video]);
    assert_eq!(
        mention.location.and_then(|l| l.label()).as_deref(),
        Some("Bogotá, Colombia")
    );
}

#[tokio::test]
async fn injected_classifier_is_used() {
    struct AlwaysNegative;
    impl SentimentClassifier for AlwaysNegative {
        fn classify(&self, _text: &str) -> Sentiment {
            Sentiment::Negative
        }
    }

    let transport = FakeTransport::new(vec![raw("1", "I love this", "2024-01-01T00:00:00Z")]);
    let adapter = adapter(Platform::Twitter, transport).with_classifier(Arc::new(AlwaysNegative));

    let mentions = adapter
        .fetch_mentions(&live_credential(Platform::Twitter), 1)
        .await
        .unwrap();
    assert_eq!(mentions[0].sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn profile_falls_back_to_handle() {
    let adapter = adapter(Platform::Instagram, FakeTransport::new(Vec::new()));

    let profile = adapter
        .fetch_profile(&live_credential(Platform::Instagram))
        .await
        .unwrap();
    assert_eq!(profile.platform, Platform::Instagram);
    assert_eq!(profile.id, "42");
    assert_eq!(profile.display_name, "acme");
    assert_eq!(
        profile.profile_url.as_deref(),
        Some("https://www.instagram.com/acme/")
    );
    assert_eq!(profile.followers, Some(1_200));
}

#[test]
fn generate_synthetic_uses_profile_platform() {
    let adapter = adapter(Platform::Linkedin, FakeTransport::new(Vec::new()));
    let mentions = adapter.generate_synthetic(6);
    assert_eq!(mentions.len(), 6);
    assert!(mentions.iter().all(|m| m.platform == Platform::Linkedin));
}
