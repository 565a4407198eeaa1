mod commands;

use clap::{Args, Parser, Subcommand};
use mentionhub_core::{Platform, Sentiment};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mentionhub-cli")]
#[command(about = "Aggregate social-media mentions across connected platforms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, merge, and optionally filter mentions from every enabled platform
    Aggregate(AggregateArgs),
    /// Show the profile summary of each enabled platform connection
    Profiles,
    /// Print synthetic mentions for one platform without calling any source
    Synthetic {
        #[arg(long)]
        platform: Platform,

        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(Debug, Args)]
struct AggregateArgs {
    /// Per-platform cap; defaults to `MENTIONHUB_MAX_PER_PLATFORM`
    #[arg(long)]
    max_per_platform: Option<usize>,

    /// Keep only these platforms (repeatable)
    #[arg(long = "platform")]
    platforms: Vec<Platform>,

    /// Keep only these sentiments (repeatable)
    #[arg(long = "sentiment")]
    sentiments: Vec<Sentiment>,

    /// First UTC day to keep (YYYY-MM-DD)
    #[arg(long)]
    from: Option<chrono::NaiveDate>,

    /// Last UTC day to keep, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: Option<chrono::NaiveDate>,

    /// Case-insensitive text to look for in content or author
    #[arg(long)]
    search: Option<String>,

    /// Print statistics over the filtered mentions instead of the mentions
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mentionhub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Aggregate(args)) => commands::run_aggregate(&config, &args).await?,
        Some(Commands::Profiles) => commands::run_profiles(&config).await?,
        Some(Commands::Synthetic { platform, count }) => commands::run_synthetic(platform, count)?,
        None => println!("mentionhub-cli: run with --help for available commands"),
    }

    Ok(())
}
