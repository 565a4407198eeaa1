//! Command handlers. Each prints a single JSON document to stdout; logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use mentionhub_core::{load_accounts, AccountFile, AppConfig, Platform};
use mentionhub_engine::{compute_statistics, filter, Aggregator, FilterCriteria};
use mentionhub_sources::{profile_for, MentionTransport, OfflineTransport, PlatformAdapter, SourceAdapter};

use crate::AggregateArgs;

impl AggregateArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            platforms: (!self.platforms.is_empty()).then(|| self.platforms.iter().copied().collect()),
            sentiments: (!self.sentiments.is_empty()).then(|| self.sentiments.iter().copied().collect()),
            date_from: self.from,
            date_to: self.to,
            search: self.search.clone(),
        }
    }
}

/// Load the account file, treating a missing file as "nothing connected".
fn load_account(config: &AppConfig) -> anyhow::Result<AccountFile> {
    let path = &config.accounts_path;
    if !path.exists() {
        tracing::warn!(path = %path.display(), "account file not found; no platforms enabled");
        return Ok(AccountFile::default());
    }
    load_accounts(path).with_context(|| format!("failed to load account file {}", path.display()))
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the account file is invalid or the feed transport
/// cannot be built. Per-platform failures are reported in the output.
pub(crate) async fn run_aggregate(config: &AppConfig, args: &AggregateArgs) -> anyhow::Result<()> {
    let account = load_account(config)?;
    let aggregator = Aggregator::from_app_config(config).context("failed to build feed transport")?;
    let max_per_platform = args.max_per_platform.unwrap_or(config.max_per_platform);

    let result = aggregator.aggregate_account(&account, max_per_platform).await;
    let mentions = filter(&result.mentions, &args.criteria());
    tracing::info!(
        fetched = result.mentions.len(),
        kept = mentions.len(),
        failed_sources = result.errors.len(),
        synthetic = result.synthetic,
        "aggregation complete"
    );

    let body = if args.stats {
        serde_json::json!({
            "synthetic": result.synthetic,
            "errors": result.errors,
            "statistics": compute_statistics(&mentions),
        })
    } else {
        serde_json::json!({
            "synthetic": result.synthetic,
            "errors": result.errors,
            "mentions": mentions,
        })
    };
    print_json(&body)
}

/// # Errors
///
/// Returns an error if the account file is invalid or the feed transport
/// cannot be built.
pub(crate) async fn run_profiles(config: &AppConfig) -> anyhow::Result<()> {
    let account = load_account(config)?;
    let aggregator = Aggregator::from_app_config(config).context("failed to build feed transport")?;

    let result = aggregator
        .fetch_profiles(&account.enabled_set(), &account)
        .await;
    print_json(&serde_json::to_value(&result)?)
}

/// # Errors
///
/// Returns an error only if the output cannot be serialized.
pub(crate) fn run_synthetic(platform: Platform, count: usize) -> anyhow::Result<()> {
    let transport: Arc<dyn MentionTransport> = Arc::new(OfflineTransport);
    let adapter = PlatformAdapter::new(profile_for(platform), transport);
    let mut mentions = adapter.generate_synthetic(count);
    mentionhub_engine::sort_mentions(&mut mentions);
    print_json(&serde_json::to_value(&mentions)?)
}
