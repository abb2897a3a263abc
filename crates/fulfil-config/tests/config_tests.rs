// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and diagnostics.

use std::io::Write;

use fulfil_config::model::{FulfilConfig, GOOGLE_CERTS_URL};
use fulfil_config::{
    ConfigError, load_and_validate_path, load_and_validate_str, load_config_from_str,
};
use fulfil_core::ApiVersion;

#[test]
fn full_document_deserializes() {
    let toml = r#"
[webhook]
version = "v1"
create_payload_object = true
log_level = "debug"

[identity]
client_id = "1234.apps.googleusercontent.com"
certs_url = "http://localhost:9000/certs"
timeout_secs = 3
issuers = ["https://accounts.google.com"]
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.webhook.version, ApiVersion::V1);
    assert!(config.webhook.create_payload_object);
    assert_eq!(config.webhook.log_level, "debug");
    assert_eq!(
        config.identity.client_id.as_deref(),
        Some("1234.apps.googleusercontent.com")
    );
    assert_eq!(config.identity.certs_url, "http://localhost:9000/certs");
    assert_eq!(config.identity.timeout_secs, 3);
    assert_eq!(config.identity.issuers, vec!["https://accounts.google.com"]);
}

#[test]
fn empty_document_yields_defaults() {
    let config = load_and_validate_str("").expect("defaults are valid");
    assert_eq!(config, FulfilConfig::default());
    assert_eq!(config.webhook.version, ApiVersion::V2);
    assert!(!config.webhook.create_payload_object);
    assert_eq!(config.identity.certs_url, GOOGLE_CERTS_URL);
    assert!(config.identity.client_id.is_none());
    assert_eq!(config.identity.issuers.len(), 2);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = load_and_validate_str("[webhook]\ncreate_payload_object = true\n").unwrap();
    assert!(config.webhook.create_payload_object);
    assert_eq!(config.webhook.log_level, "info");
    assert_eq!(config.identity.timeout_secs, 10);
}

#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[webhook]
create_payload_objet = true
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "create_payload_objet");
            assert_eq!(suggestion.as_deref(), Some("create_payload_object"));
            assert!(valid_keys.contains("log_level"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[server]\nport = 8080\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "server"));
}

#[test]
fn wrong_type_is_reported_with_path() {
    let errors = load_and_validate_str("[identity]\ntimeout_secs = \"ten\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert_eq!(key, "identity.timeout_secs"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn unknown_version_is_rejected() {
    let errors = load_and_validate_str("[webhook]\nversion = \"v3\"\n").unwrap_err();
    assert!(!errors.is_empty());
    assert!(errors[0].to_string().contains("v3"));
}

#[test]
fn validation_runs_after_deserialization() {
    let toml = r#"
[webhook]
log_level = "chatty"

[identity]
timeout_secs = 0
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

#[test]
fn explicit_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[webhook]\nversion = \"v1\"").unwrap();

    let config = load_and_validate_path(file.path()).unwrap();
    assert_eq!(config.webhook.version, ApiVersion::V1);
}

#[test]
fn defaults_round_trip_through_toml() {
    let rendered = toml::to_string(&FulfilConfig::default()).unwrap();
    let config = load_and_validate_str(&rendered).unwrap();
    assert_eq!(config, FulfilConfig::default());
}
