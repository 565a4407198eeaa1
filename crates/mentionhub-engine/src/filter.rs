//! Order-preserving selection of mentions by platform, sentiment, date, and text.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use mentionhub_core::{Mention, Platform, Sentiment};
use serde::{Deserialize, Serialize};

/// Criteria are ANDed across fields; the platform and sentiment sets match
/// any member. Absent (or empty) fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub platforms: Option<BTreeSet<Platform>>,
    pub sentiments: Option<BTreeSet<Sentiment>>,
    /// Inclusive, UTC calendar date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive: the whole UTC day is kept.
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring of content, author display name, or handle.
    pub search: Option<String>,
}

/// Return the mentions matching `criteria`, in their original order.
#[must_use]
pub fn filter(mentions: &[Mention], criteria: &FilterCriteria) -> Vec<Mention> {
    let needle = criteria
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(fold_case);
    let platforms = criteria.platforms.as_ref().filter(|set| !set.is_empty());
    let sentiments = criteria.sentiments.as_ref().filter(|set| !set.is_empty());

    mentions
        .iter()
        .filter(|m| platforms.is_none_or(|set| set.contains(&m.platform)))
        .filter(|m| sentiments.is_none_or(|set| set.contains(&m.sentiment)))
        .filter(|m| {
            let day = m.occurred_at.date_naive();
            criteria.date_from.is_none_or(|from| day >= from)
                && criteria.date_to.is_none_or(|to| day <= to)
        })
        .filter(|m| needle.as_deref().is_none_or(|n| matches_text(m, n)))
        .cloned()
        .collect()
}

fn matches_text(mention: &Mention, needle: &str) -> bool {
    fold_case(&mention.content).contains(needle)
        || fold_case(&mention.author.display_name).contains(needle)
        || mention
            .author
            .handle
            .as_deref()
            .is_some_and(|h| fold_case(h).contains(needle))
}

/// Per-character lowercase. Unlike `str::to_lowercase` it ignores word
/// position (final sigma), so a substring stays a substring after folding.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
