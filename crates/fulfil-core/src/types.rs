// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared enums and small value types used by both message schemas.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Arbitrary JSON parameters keyed by name (context and event parameters,
/// intent parameters, decoded user storage).
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Target platform of a fulfillment message.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// Neutral wildcard: the message applies to every integration.
    #[default]
    #[serde(rename = "PLATFORM_UNSPECIFIED")]
    #[strum(serialize = "PLATFORM_UNSPECIFIED")]
    Unspecified,
    Facebook,
    Slack,
    Telegram,
    Kik,
    Skype,
    Line,
    Viber,
    /// The vendor platform whose payload schema is mirrored by the builder.
    ActionsOnGoogle,
    GoogleHangouts,
}

impl Platform {
    /// Whether this is the platform backed by the vendor payload schema.
    pub fn is_vendor(self) -> bool {
        matches!(self, Self::ActionsOnGoogle)
    }
}

/// Discriminator for the content carried by a message envelope.
///
/// Every content variant maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageKind {
    Text,
    Image,
    Card,
    QuickReplies,
    ListSelect,
    CarouselSelect,
    CarouselBrowseCard,
    TableCard,
    Media,
    SimpleResponses,
    Suggestions,
    BasicCard,
    LinkOutSuggestion,
    Payload,
}

impl MessageKind {
    /// Kinds that only render on the vendor platform. Content of these kinds
    /// is always forwarded to the vendor payload, whatever platform the caller
    /// tagged it with.
    pub fn is_vendor_exclusive(self) -> bool {
        matches!(
            self,
            Self::LinkOutSuggestion | Self::CarouselBrowseCard | Self::TableCard | Self::Media
        )
    }
}

/// Image display options for platform-neutral cards and carousels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageDisplayOptions {
    /// Universal "unspecified" sentinel.
    #[default]
    #[serde(rename = "IMAGE_DISPLAY_OPTIONS_UNSPECIFIED")]
    Unspecified,
    Gray,
    White,
    Cropped,
    BlurredBackground,
}

/// Media type of a platform-neutral media response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseMediaType {
    #[default]
    #[serde(rename = "RESPONSE_MEDIA_TYPE_UNSPECIFIED")]
    Unspecified,
    Audio,
}

/// Column alignment in table cards. Shared by both schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlignment {
    #[default]
    #[serde(rename = "HORIZONTAL_ALIGNMENT_UNSPECIFIED")]
    Unspecified,
    Leading,
    Center,
    Trailing,
}

/// Hint for how a URL should be opened. Shared by both schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrlTypeHint {
    #[default]
    #[serde(rename = "URL_TYPE_HINT_UNSPECIFIED")]
    Unspecified,
    AmpAction,
    AmpContent,
}

/// Webhook schema version. Selects which field names are read from the
/// inbound document (`queryResult` vs `result`, `session` vs `sessionId`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

/// Profile claims extracted from a verified identity token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}
