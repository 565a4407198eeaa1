//! Cross-source aggregation, statistics, and filtering over canonical mentions.
//!
//! The three entry points a UI or HTTP handler calls are
//! [`Aggregator::aggregate`], [`compute_statistics`], and [`filter`].

pub mod aggregator;
pub mod filter;
pub mod provider;
pub mod statistics;

pub use aggregator::{
    sort_mentions, AggregationResult, Aggregator, AggregatorConfig, ProfilesResult, SourceFailure,
};
pub use filter::{filter, FilterCriteria};
pub use provider::{CredentialProvider, PlatformEnablement};
pub use statistics::{compute_statistics, LocationCount, Statistics, TOP_LOCATIONS_LIMIT};
