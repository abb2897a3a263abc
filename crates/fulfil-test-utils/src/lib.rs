// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Fulfil integration tests.
//!
//! # Components
//!
//! - [`RequestFixture`] - Builder for webhook request documents in either
//!   schema version
//! - [`MockIdentityVerifier`] - Identity verifier with scripted outcomes and
//!   call capture

pub mod fixture;
pub mod mock_verifier;

pub use fixture::RequestFixture;
pub use mock_verifier::MockIdentityVerifier;
