// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for webhook request handling and response construction.

use thiserror::Error;

use crate::types::{MessageKind, Platform};

/// The error type shared by every Fulfil crate.
#[derive(Debug, Error)]
pub enum FulfilError {
    /// The inbound document is missing a required structural field, or a
    /// field has the wrong JSON type (e.g. no `queryResult`, or a user storage
    /// string that is not a JSON object).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No message of the requested kind exists for the platform.
    #[error("no `{kind}` message registered for platform {platform}")]
    NotFound { platform: Platform, kind: MessageKind },

    /// The operation has no mapping for the target representation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The identity token could not be decoded or its signature, audience or
    /// issuer did not check out.
    #[error("identity verification failed: {message}")]
    IdentityVerification {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network failure talking to an external collaborator.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An external call did not finish in time.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },
}

impl FulfilError {
    /// Shorthand for [`FulfilError::MalformedInput`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Shorthand for [`FulfilError::UnsupportedOperation`].
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// Identity verification failure without an underlying cause.
    pub fn identity(message: impl Into<String>) -> Self {
        Self::IdentityVerification {
            message: message.into(),
            source: None,
        }
    }

    /// Returns `true` for lookup misses, which callers routinely probe for.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
