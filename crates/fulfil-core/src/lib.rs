// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Fulfil, a Dialogflow webhook response builder.
//!
//! This crate holds the pieces every other crate agrees on: the shared error
//! type, platform and message-kind enums, the platform-neutral message content
//! records, and the identity-verification seam.

pub mod content;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FulfilError;
pub use traits::IdentityVerifier;
pub use types::{
    ApiVersion, HorizontalAlignment, ImageDisplayOptions, MessageKind, Parameters, Platform,
    ResponseMediaType, UrlTypeHint, VerifiedIdentity,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn platform_wire_names() {
        assert_eq!(
            serde_json::to_string(&Platform::ActionsOnGoogle).unwrap(),
            "\"ACTIONS_ON_GOOGLE\""
        );
        assert_eq!(
            serde_json::to_string(&Platform::Unspecified).unwrap(),
            "\"PLATFORM_UNSPECIFIED\""
        );
        assert_eq!(Platform::default(), Platform::Unspecified);
    }

    #[test]
    fn platform_display_and_from_str_agree() {
        let platforms = [
            Platform::Unspecified,
            Platform::Facebook,
            Platform::Slack,
            Platform::Telegram,
            Platform::Kik,
            Platform::Skype,
            Platform::Line,
            Platform::Viber,
            Platform::ActionsOnGoogle,
            Platform::GoogleHangouts,
        ];
        for platform in platforms {
            let parsed = Platform::from_str(&platform.to_string()).expect("should parse back");
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn only_actions_on_google_is_vendor() {
        assert!(Platform::ActionsOnGoogle.is_vendor());
        assert!(!Platform::Facebook.is_vendor());
        assert!(!Platform::Unspecified.is_vendor());
    }

    #[test]
    fn message_kind_display_is_snake_case() {
        assert_eq!(MessageKind::SimpleResponses.to_string(), "simple_responses");
        assert_eq!(MessageKind::CarouselBrowseCard.to_string(), "carousel_browse_card");
        assert_eq!(
            MessageKind::from_str("link_out_suggestion").unwrap(),
            MessageKind::LinkOutSuggestion
        );
    }

    #[test]
    fn api_version_parses_lowercase() {
        assert_eq!(ApiVersion::from_str("v1").unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::default(), ApiVersion::V2);
        assert_eq!(serde_json::to_string(&ApiVersion::V1).unwrap(), "\"v1\"");
    }

    #[test]
    fn not_found_is_distinct() {
        let err = FulfilError::NotFound {
            platform: Platform::Slack,
            kind: MessageKind::Payload,
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "no `payload` message registered for platform SLACK"
        );
        assert!(!FulfilError::malformed("x").is_not_found());
    }

    struct StaticVerifier;

    #[async_trait::async_trait]
    impl IdentityVerifier for StaticVerifier {
        async fn verify_identity_token(
            &self,
            token: &str,
        ) -> Result<VerifiedIdentity, FulfilError> {
            if token == "ok" {
                Ok(VerifiedIdentity {
                    given_name: "Ada".into(),
                    family_name: "Lovelace".into(),
                    email: "ada@example.com".into(),
                })
            } else {
                Err(FulfilError::identity("bad token"))
            }
        }
    }

    #[tokio::test]
    async fn identity_verifier_is_object_safe() {
        let verifier: Box<dyn IdentityVerifier> = Box::new(StaticVerifier);
        let identity = verifier.verify_identity_token("ok").await.unwrap();
        assert_eq!(identity.email, "ada@example.com");
        assert!(verifier.verify_identity_token("nope").await.is_err());
    }
}
