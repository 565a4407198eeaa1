use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub accounts_path: PathBuf,
    /// Base URL of the mention feed gateway. `None` selects the offline transport.
    pub feed_base_url: Option<String>,
    pub tracked_entity: Option<String>,
    pub source_timeout_ms: u64,
    pub max_per_platform: usize,
    pub max_concurrent_sources: usize,
    pub user_agent: String,
}
