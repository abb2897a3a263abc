// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for Fulfil.
//!
//! Every section rejects unknown keys so that typos surface at startup
//! instead of silently falling back to defaults.

use fulfil_core::ApiVersion;
use serde::{Deserialize, Serialize};

/// Default Google JWKS endpoint used to verify assistant identity tokens.
pub const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Top-level configuration. All sections are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FulfilConfig {
    /// Request parsing and response construction.
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Identity token verification.
    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookConfig {
    /// Dialogflow webhook schema version of inbound requests.
    #[serde(default)]
    pub version: ApiVersion,

    /// Mirror the vendor payload into the message list as a `payload`
    /// envelope.
    #[serde(default)]
    pub create_payload_object: bool,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            version: ApiVersion::default(),
            create_payload_object: false,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// OAuth client id the identity token must be issued for. Verification
    /// is unavailable until this is set.
    #[serde(default)]
    pub client_id: Option<String>,

    /// JWKS endpoint.
    #[serde(default = "default_certs_url")]
    pub certs_url: String,

    /// Timeout for the key-set fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accepted `iss` claim values.
    #[serde(default = "default_issuers")]
    pub issuers: Vec<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            certs_url: default_certs_url(),
            timeout_secs: default_timeout_secs(),
            issuers: default_issuers(),
        }
    }
}

fn default_certs_url() -> String {
    GOOGLE_CERTS_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_issuers() -> Vec<String> {
    vec![
        "https://accounts.google.com".to_string(),
        "accounts.google.com".to_string(),
    ]
}
