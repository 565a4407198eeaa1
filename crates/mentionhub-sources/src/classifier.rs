//! Keyword sentiment classifier.
//!
//! A deliberately coarse placeholder: counts case-insensitive substring
//! occurrences of a fixed positive and a fixed negative word list and
//! compares the totals. Substring matching means stems like `disappoint`
//! cover `disappointed` and `disappointing`, and also that unrelated words
//! can match (`whatever` contains `hate`). Swap in a real model by
//! implementing [`SentimentClassifier`].

use mentionhub_core::Sentiment;

/// Positive stems, lowercase.
pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "love",
    "great",
    "amazing",
    "awesome",
    "excellent",
    "fantastic",
    "happy",
    "best",
    "recommend",
    "wonderful",
    "thank",
    "brilliant",
    "impressive",
    "proud",
    "congrat",
    "inspiring",
    "helpful",
];

/// Negative stems, lowercase.
pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "worst",
    "bad",
    "disappoint",
    "angry",
    "poor",
    "broken",
    "scam",
    "fail",
    "problem",
    "useless",
    "annoying",
    "horrible",
    "rude",
];

/// Assigns a sentiment to free text. Applied once per mention at the
/// adapter boundary.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;
}

/// The default [`SentimentClassifier`], backed by [`classify_sentiment`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl SentimentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Sentiment {
        classify_sentiment(text)
    }
}

/// Count positive and negative keyword occurrences in `text`.
#[must_use]
pub fn keyword_counts(text: &str) -> (usize, usize) {
    let lower = text.to_lowercase();
    let count = |words: &[&str]| -> usize { words.iter().map(|w| lower.matches(w).count()).sum() };
    (count(POSITIVE_WORDS), count(NEGATIVE_WORDS))
}

/// Classify `text` as positive, negative, or neutral by keyword majority.
#[must_use]
pub fn classify_sentiment(text: &str) -> Sentiment {
    let (positive, negative) = keyword_counts(text);
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
