// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock identity verifier for deterministic testing.
//!
//! Tokens listed with [`MockIdentityVerifier::accept`] verify to their
//! identity; anything else fails with an identity-verification error. Every
//! token passed in is recorded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use fulfil_core::{FulfilError, IdentityVerifier, VerifiedIdentity};

#[derive(Debug, Default)]
pub struct MockIdentityVerifier {
    accepted: HashMap<String, VerifiedIdentity>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockIdentityVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `token` as proof of `identity`.
    pub fn accept(mut self, token: impl Into<String>, identity: VerifiedIdentity) -> Self {
        self.accepted.insert(token.into(), identity);
        self
    }

    /// Tokens seen so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl IdentityVerifier for MockIdentityVerifier {
    async fn verify_identity_token(&self, token: &str) -> Result<VerifiedIdentity, FulfilError> {
        self.calls.lock().await.push(token.to_string());
        self.accepted
            .get(token)
            .cloned()
            .ok_or_else(|| FulfilError::identity(format!("token `{token}` is not accepted")))
    }
}
