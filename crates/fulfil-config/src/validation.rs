// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::FulfilConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validate a deserialized configuration, collecting every failure rather
/// than stopping at the first.
pub fn validate_config(config: &FulfilConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.webhook.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "webhook.log_level `{}` is not one of {}",
                config.webhook.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let identity = &config.identity;

    if let Some(client_id) = &identity.client_id
        && client_id.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "identity.client_id must not be empty when set".to_string(),
        });
    }

    let url = identity.certs_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(ConfigError::Validation {
            message: format!("identity.certs_url `{url}` must be an http(s) URL"),
        });
    }

    if identity.timeout_secs == 0 || identity.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(ConfigError::Validation {
            message: format!(
                "identity.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
                identity.timeout_secs
            ),
        });
    }

    if identity.issuers.is_empty() {
        errors.push(ConfigError::Validation {
            message: "identity.issuers must list at least one issuer".to_string(),
        });
    }
    for (i, issuer) in identity.issuers.iter().enumerate() {
        if issuer.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("identity.issuers[{i}] must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &FulfilConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&FulfilConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails() {
        let mut config = FulfilConfig::default();
        config.webhook.log_level = "loud".to_string();
        assert!(messages(&config)[0].contains("webhook.log_level"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = FulfilConfig::default();
        config.webhook.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn all_identity_errors_are_collected() {
        let mut config = FulfilConfig::default();
        config.identity.client_id = Some("  ".to_string());
        config.identity.certs_url = "ftp://keys".to_string();
        config.identity.timeout_secs = 0;
        config.identity.issuers.clear();

        let messages = messages(&config);
        assert_eq!(messages.len(), 4);
        assert!(messages.iter().any(|m| m.contains("client_id")));
        assert!(messages.iter().any(|m| m.contains("certs_url")));
        assert!(messages.iter().any(|m| m.contains("timeout_secs")));
        assert!(messages.iter().any(|m| m.contains("issuers")));
    }
}
