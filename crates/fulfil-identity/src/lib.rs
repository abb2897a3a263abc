// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity token verification for Fulfil.
//!
//! [`GoogleIdentityVerifier`] checks RS256-signed identity tokens against the
//! key set published at the configured JWKS endpoint, and returns the user
//! profile claims they carry.

pub mod verifier;

pub use verifier::GoogleIdentityVerifier;
