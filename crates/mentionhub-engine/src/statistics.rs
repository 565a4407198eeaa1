//! Summary counts over a mention collection.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use mentionhub_core::{Mention, Platform, Sentiment};
use serde::Serialize;

/// Maximum number of entries in [`Statistics::top_locations`].
pub const TOP_LOCATIONS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub by_platform: BTreeMap<Platform, usize>,
    pub by_sentiment: BTreeMap<Sentiment, usize>,
    /// Keyed by UTC calendar date of `occurred_at`.
    pub by_date: BTreeMap<NaiveDate, usize>,
    /// Most frequent `"{city}, {country}"` labels, count descending.
    /// Ties keep the order in which each label was first seen.
    pub top_locations: Vec<LocationCount>,
}

/// Compute counts for `mentions`. Total: empty input gives empty statistics.
#[must_use]
pub fn compute_statistics(mentions: &[Mention]) -> Statistics {
    let mut stats = Statistics {
        total: mentions.len(),
        ..Statistics::default()
    };

    // label -> index into `locations`, so first-seen order survives the sort
    let mut location_index: HashMap<String, usize> = HashMap::new();
    let mut locations: Vec<LocationCount> = Vec::new();

    for mention in mentions {
        *stats.by_platform.entry(mention.platform).or_insert(0) += 1;
        *stats.by_sentiment.entry(mention.sentiment).or_insert(0) += 1;
        *stats
            .by_date
            .entry(mention.occurred_at.date_naive())
            .or_insert(0) += 1;

        let Some(label) = mention.location.as_ref().and_then(|l| l.label()) else {
            continue;
        };
        if let Some(&idx) = location_index.get(&label) {
            locations[idx].count += 1;
        } else {
            location_index.insert(label.clone(), locations.len());
            locations.push(LocationCount {
                name: label,
                count: 1,
            });
        }
    }

    // stable sort keeps first-encountered order among equal counts
    locations.sort_by(|a, b| b.count.cmp(&a.count));
    locations.truncate(TOP_LOCATIONS_LIMIT);
    stats.top_locations = locations;

    stats
}
