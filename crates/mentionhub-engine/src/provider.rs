//! Interfaces supplied by the session/account layer.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use mentionhub_core::{AccountFile, Platform, SourceCredential};

/// Supplies the access credential for a platform, if one exists.
pub trait CredentialProvider: Send + Sync {
    fn credential(&self, platform: Platform) -> Option<SourceCredential>;
}

/// Supplies the set of platforms connected for the current account.
pub trait PlatformEnablement: Send + Sync {
    fn enabled_platforms(&self) -> BTreeSet<Platform>;
}

impl CredentialProvider for HashMap<Platform, SourceCredential> {
    fn credential(&self, platform: Platform) -> Option<SourceCredential> {
        self.get(&platform).cloned()
    }
}

impl CredentialProvider for BTreeMap<Platform, SourceCredential> {
    fn credential(&self, platform: Platform) -> Option<SourceCredential> {
        self.get(&platform).cloned()
    }
}

impl CredentialProvider for [SourceCredential] {
    fn credential(&self, platform: Platform) -> Option<SourceCredential> {
        self.iter().find(|c| c.platform == platform).cloned()
    }
}

impl CredentialProvider for AccountFile {
    fn credential(&self, platform: Platform) -> Option<SourceCredential> {
        self.credential_for(platform).cloned()
    }
}

impl PlatformEnablement for BTreeSet<Platform> {
    fn enabled_platforms(&self) -> BTreeSet<Platform> {
        self.clone()
    }
}

impl PlatformEnablement for AccountFile {
    fn enabled_platforms(&self) -> BTreeSet<Platform> {
        self.enabled_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_provider_finds_by_platform() {
        let credentials = vec![
            SourceCredential::new(Platform::Twitter, "tw", Some(1)),
            SourceCredential::new(Platform::Linkedin, "li", Some(2)),
        ];
        let found = credentials.as_slice().credential(Platform::Linkedin).unwrap();
        assert_eq!(found.access_token, "li");
        assert!(credentials.as_slice().credential(Platform::Facebook).is_none());
    }

    #[test]
    fn account_file_implements_both_interfaces() {
        let accounts = mentionhub_core::parse_accounts(
            "enabled: [facebook, facebook]\ncredentials:\n  - platform: facebook\n    access_token: fb\n",
        )
        .unwrap();
        assert_eq!(
            accounts.enabled_platforms(),
            BTreeSet::from([Platform::Facebook])
        );
        assert_eq!(
            accounts.credential(Platform::Facebook).unwrap().access_token,
            "fb"
        );
    }
}
