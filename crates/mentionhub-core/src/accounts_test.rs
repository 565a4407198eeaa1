use std::path::Path;

use super::*;

#[test]
fn parses_enabled_platforms_and_credentials() {
    let yaml = r#"
enabled: [twitter, instagram]
credentials:
  - platform: twitter
    access_token: "tw-token"
    expires_at: 1893456000
  - platform: instagram
    access_token: "ig-token"
"#;
    let accounts = parse_accounts(yaml).unwrap();
    assert_eq!(
        accounts.enabled_set().into_iter().collect::<Vec<_>>(),
        vec![Platform::Instagram, Platform::Twitter]
    );

    let twitter = accounts.credential_for(Platform::Twitter).unwrap();
    assert_eq!(twitter.access_token, "tw-token");
    assert_eq!(twitter.expires_at_epoch_seconds, Some(1_893_456_000));

    let instagram = accounts.credential_for(Platform::Instagram).unwrap();
    assert!(instagram.expires_at_epoch_seconds.is_none());
    assert!(accounts.credential_for(Platform::Facebook).is_none());
}

#[test]
fn empty_document_yields_empty_accounts() {
    let accounts = parse_accounts("{}").unwrap();
    assert!(accounts.enabled.is_empty());
    assert!(accounts.credentials.is_empty());
}

#[test]
fn accepts_long_form_expiry_key() {
    let yaml = r#"
credentials:
  - platform: linkedin
    access_token: "li"
    expires_at_epoch_seconds: 42
"#;
    let accounts = parse_accounts(yaml).unwrap();
    assert_eq!(
        accounts
            .credential_for(Platform::Linkedin)
            .unwrap()
            .expires_at_epoch_seconds,
        Some(42)
    );
}

#[test]
fn unknown_platform_is_a_parse_error() {
    let yaml = "enabled: [myspace]\n";
    let result = parse_accounts(yaml);
    assert!(
        matches!(result, Err(ConfigError::AccountsFileParse(_))),
        "expected AccountsFileParse, got: {result:?}"
    );
}

#[test]
fn duplicate_credentials_are_rejected() {
    let yaml = r#"
credentials:
  - platform: facebook
    access_token: "a"
  - platform: facebook
    access_token: "b"
"#;
    let result = parse_accounts(yaml);
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("duplicate")),
        "expected duplicate validation error, got: {result:?}"
    );
}

#[test]
fn blank_token_is_rejected() {
    let yaml = r#"
credentials:
  - platform: twitter
    access_token: "   "
"#;
    let result = parse_accounts(yaml);
    assert!(
        matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("empty access_token")),
        "expected blank token validation error, got: {result:?}"
    );
}

#[test]
fn missing_file_reports_path() {
    let result = load_accounts(Path::new("/nonexistent/accounts.yaml"));
    match result {
        Err(ConfigError::AccountsFileIo { path, .. }) => {
            assert_eq!(path, "/nonexistent/accounts.yaml");
        }
        other => panic!("expected AccountsFileIo, got: {other:?}"),
    }
}
