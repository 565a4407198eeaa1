//! YAML account file: which platforms are connected and their access tokens.
//!
//! Stands in for the external credential store and account connection state
//! when running from the command line.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::model::{Platform, SourceCredential};
use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountFile {
    /// Platforms connected for the current account.
    #[serde(default)]
    pub enabled: Vec<Platform>,
    #[serde(default)]
    pub credentials: Vec<SourceCredential>,
}

impl AccountFile {
    /// Enabled platforms as a set; duplicates in the file collapse.
    #[must_use]
    pub fn enabled_set(&self) -> BTreeSet<Platform> {
        self.enabled.iter().copied().collect()
    }

    #[must_use]
    pub fn credential_for(&self, platform: Platform) -> Option<&SourceCredential> {
        self.credentials.iter().find(|c| c.platform == platform)
    }
}

/// Load and validate the account file at `path`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_accounts(path: &Path) -> Result<AccountFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AccountsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_accounts(&content)
}

/// Parse and validate account file contents.
///
/// # Errors
///
/// Returns `ConfigError::AccountsFileParse` on malformed YAML or unknown
/// platform names, and `ConfigError::Validation` on duplicate or blank credentials.
pub fn parse_accounts(content: &str) -> Result<AccountFile, ConfigError> {
    let accounts: AccountFile = serde_yaml::from_str(content)?;
    validate_accounts(&accounts)?;
    Ok(accounts)
}

fn validate_accounts(accounts: &AccountFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for credential in &accounts.credentials {
        if credential.access_token.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "credential for '{}' has an empty access_token",
                credential.platform
            )));
        }

        if !seen.insert(credential.platform) {
            return Err(ConfigError::Validation(format!(
                "duplicate credential for platform '{}'",
                credential.platform
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
