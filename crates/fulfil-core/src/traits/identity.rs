// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity-token verification.

use async_trait::async_trait;

use crate::error::FulfilError;
use crate::types::VerifiedIdentity;

/// Verifies the signed identity token attached to an inbound request and
/// returns the profile claims it carries.
///
/// Implementations may perform network I/O (fetching signing keys) and are
/// expected to bound it with a timeout.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Decodes and checks `token`, failing with
    /// [`FulfilError::IdentityVerification`] when it cannot be trusted.
    async fn verify_identity_token(&self, token: &str) -> Result<VerifiedIdentity, FulfilError>;
}
