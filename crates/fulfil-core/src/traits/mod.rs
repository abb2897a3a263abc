// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seams to external collaborators.
//!
//! Traits use `#[async_trait]` so implementations can be held as trait
//! objects by the request layer.

pub mod identity;

pub use identity::IdentityVerifier;
