// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JWKS-backed identity token verifier.
//!
//! Signing keys are fetched lazily and cached. A token whose key id is not in
//! the cache triggers one refetch, which picks up rotated keys.

use std::time::Duration;

use async_trait::async_trait;
use fulfil_config::IdentityConfig;
use fulfil_core::{FulfilError, IdentityVerifier, VerifiedIdentity};
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Profile claims read from a verified token. Absent claims are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileClaims {
    given_name: String,
    family_name: String,
    email: String,
}

/// Verifies identity tokens issued for one OAuth client.
#[derive(Debug)]
pub struct GoogleIdentityVerifier {
    client: reqwest::Client,
    client_id: String,
    certs_url: String,
    issuers: Vec<String>,
    timeout: Duration,
    keys: RwLock<Option<JwkSet>>,
}

fn identity_error(context: &str, err: jsonwebtoken::errors::Error) -> FulfilError {
    FulfilError::IdentityVerification {
        message: format!("{context}: {err}"),
        source: Some(Box::new(err)),
    }
}

fn decoding_key(jwk: &Jwk) -> Result<DecodingKey, FulfilError> {
    DecodingKey::from_jwk(jwk).map_err(|e| identity_error("unusable signing key", e))
}

impl GoogleIdentityVerifier {
    /// Build a verifier from the `[identity]` section.
    ///
    /// Fails with [`FulfilError::Config`] when no client id is configured.
    pub fn new(config: &IdentityConfig) -> Result<Self, FulfilError> {
        let client_id = config
            .client_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                FulfilError::Config(
                    "identity.client_id must be set to verify identity tokens".to_string(),
                )
            })?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FulfilError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            client_id,
            certs_url: config.certs_url.clone(),
            issuers: config.issuers.clone(),
            timeout,
            keys: RwLock::new(None),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn transport_error(&self, context: &str, err: reqwest::Error) -> FulfilError {
        if err.is_timeout() {
            warn!(url = %self.certs_url, timeout = ?self.timeout, "key set fetch timed out");
            return FulfilError::Timeout {
                duration: self.timeout,
            };
        }
        FulfilError::Transport {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        }
    }

    async fn fetch_keys(&self) -> Result<JwkSet, FulfilError> {
        debug!(url = %self.certs_url, "fetching identity signing keys");
        let response = self
            .client
            .get(&self.certs_url)
            .send()
            .await
            .map_err(|e| self.transport_error("key set request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %self.certs_url, "key set endpoint returned an error");
            return Err(FulfilError::Transport {
                message: format!("key set endpoint returned {status}"),
                source: None,
            });
        }

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| self.transport_error("invalid key set document", e))?;
        debug!(keys = keys.keys.len(), "identity signing keys fetched");
        Ok(keys)
    }

    /// Key for `kid`, from the cache or from a fresh fetch.
    async fn key_for(&self, kid: &str) -> Result<DecodingKey, FulfilError> {
        {
            let cached = self.keys.read().await;
            if let Some(jwk) = cached.as_ref().and_then(|keys| keys.find(kid)) {
                return decoding_key(jwk);
            }
        }

        let fetched = self.fetch_keys().await?;
        let mut cached = self.keys.write().await;
        let keys = cached.insert(fetched);
        let jwk = keys
            .find(kid)
            .ok_or_else(|| FulfilError::identity(format!("no signing key with id `{kid}`")))?;
        decoding_key(jwk)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.client_id]);
        validation.set_issuer(&self.issuers);
        validation
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify_identity_token(&self, token: &str) -> Result<VerifiedIdentity, FulfilError> {
        let header = decode_header(token).map_err(|e| identity_error("invalid token header", e))?;
        let kid = header
            .kid
            .ok_or_else(|| FulfilError::identity("token header has no key id"))?;

        let key = self.key_for(&kid).await?;
        let data = decode::<ProfileClaims>(token, &key, &self.validation())
            .map_err(|e| identity_error("token rejected", e))?;

        debug!(kid = %kid, email = %data.claims.email, "identity token accepted");
        Ok(VerifiedIdentity {
            given_name: data.claims.given_name,
            family_name: data.claims.family_name,
            email: data.claims.email,
        })
    }
}
