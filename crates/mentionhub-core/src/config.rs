use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("MENTIONHUB_ENV", "development"))?;
    let log_level = or_default("MENTIONHUB_LOG_LEVEL", "info");
    let accounts_path = PathBuf::from(or_default(
        "MENTIONHUB_ACCOUNTS_PATH",
        "./config/accounts.yaml",
    ));

    let feed_base_url = optional("MENTIONHUB_FEED_BASE_URL");
    if let Some(url) = &feed_base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                var: "MENTIONHUB_FEED_BASE_URL".to_string(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
    }
    let tracked_entity = optional("MENTIONHUB_TRACKED_ENTITY");

    let source_timeout_ms = parse_u64("MENTIONHUB_SOURCE_TIMEOUT_MS", "10000")?;
    if source_timeout_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "MENTIONHUB_SOURCE_TIMEOUT_MS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let max_per_platform = parse_usize("MENTIONHUB_MAX_PER_PLATFORM", "50")?;
    let max_concurrent_sources = parse_usize("MENTIONHUB_MAX_CONCURRENT_SOURCES", "4")?.max(1);
    let user_agent = or_default(
        "MENTIONHUB_USER_AGENT",
        "mentionhub/0.1 (mention-aggregation)",
    );

    Ok(AppConfig {
        env,
        log_level,
        accounts_path,
        feed_base_url,
        tracked_entity,
        source_timeout_ms,
        max_per_platform,
        max_concurrent_sources,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MENTIONHUB_ENV".to_string(),
            reason: format!(
                "unrecognized environment '{other}'; expected development, test, or production"
            ),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
