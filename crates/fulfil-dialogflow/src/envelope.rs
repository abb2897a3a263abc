// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fulfillment message envelopes.
//!
//! On the wire a message is an object with a `platform` key and exactly one
//! content key (`text`, `basicCard`, `payload`, ...). [`MessageContent`] is
//! that content as a closed enum, so the [`MessageKind`] of an envelope is
//! always derived from what it holds.

use fulfil_actions::ActionsPayload;
use fulfil_core::content::{
    BasicCard, BrowseCarouselCard, Card, CarouselSelect, Image, LinkOutSuggestion, ListSelect,
    MediaContent, QuickReplies, SimpleResponses, Suggestions, TableCard, Text,
};
use fulfil_core::{MessageKind, Platform};
use serde::{Deserialize, Serialize};

/// Vendor payload as carried by Dialogflow: keyed by integration name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub google: ActionsPayload,
}

impl From<ActionsPayload> for Payload {
    fn from(google: ActionsPayload) -> Self {
        Self { google }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageContent {
    Text(Text),
    Image(Image),
    Card(Card),
    QuickReplies(QuickReplies),
    ListSelect(ListSelect),
    CarouselSelect(CarouselSelect),
    #[serde(rename = "browseCarouselCard")]
    CarouselBrowseCard(BrowseCarouselCard),
    TableCard(TableCard),
    #[serde(rename = "mediaContent")]
    Media(MediaContent),
    SimpleResponses(SimpleResponses),
    Suggestions(Suggestions),
    BasicCard(BasicCard),
    LinkOutSuggestion(LinkOutSuggestion),
    Payload(Payload),
}

impl MessageContent {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Text(_) => MessageKind::Text,
            Self::Image(_) => MessageKind::Image,
            Self::Card(_) => MessageKind::Card,
            Self::QuickReplies(_) => MessageKind::QuickReplies,
            Self::ListSelect(_) => MessageKind::ListSelect,
            Self::CarouselSelect(_) => MessageKind::CarouselSelect,
            Self::CarouselBrowseCard(_) => MessageKind::CarouselBrowseCard,
            Self::TableCard(_) => MessageKind::TableCard,
            Self::Media(_) => MessageKind::Media,
            Self::SimpleResponses(_) => MessageKind::SimpleResponses,
            Self::Suggestions(_) => MessageKind::Suggestions,
            Self::BasicCard(_) => MessageKind::BasicCard,
            Self::LinkOutSuggestion(_) => MessageKind::LinkOutSuggestion,
            Self::Payload(_) => MessageKind::Payload,
        }
    }
}

macro_rules! content_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for MessageContent {
                fn from(content: $ty) -> Self {
                    Self::$variant(content)
                }
            }
        )*
    };
}

content_from!(
    Text(Text),
    Image(Image),
    Card(Card),
    QuickReplies(QuickReplies),
    ListSelect(ListSelect),
    CarouselSelect(CarouselSelect),
    CarouselBrowseCard(BrowseCarouselCard),
    TableCard(TableCard),
    Media(MediaContent),
    SimpleResponses(SimpleResponses),
    Suggestions(Suggestions),
    BasicCard(BasicCard),
    LinkOutSuggestion(LinkOutSuggestion),
    Payload(Payload),
);

/// One entry of `fulfillmentMessages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub platform: Platform,
    #[serde(flatten)]
    pub content: MessageContent,
}

impl MessageEnvelope {
    pub fn new(platform: Platform, content: impl Into<MessageContent>) -> Self {
        Self {
            platform,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.content.kind()
    }

    /// Whether this envelope is for `platform` and holds `kind` content.
    pub fn matches(&self, platform: Platform, kind: MessageKind) -> bool {
        self.platform == platform && self.kind() == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fulfil_core::content::SimpleResponse;
    use serde_json::json;

    #[test]
    fn kind_follows_content() {
        let envelope = MessageEnvelope::new(Platform::Slack, Text::new("hi"));
        assert_eq!(envelope.kind(), MessageKind::Text);
        assert!(envelope.matches(Platform::Slack, MessageKind::Text));
        assert!(!envelope.matches(Platform::Facebook, MessageKind::Text));

        let media = MessageEnvelope::new(Platform::ActionsOnGoogle, MediaContent::default());
        assert_eq!(media.kind(), MessageKind::Media);
    }

    #[test]
    fn envelope_flattens_content_key() {
        let envelope = MessageEnvelope::new(
            Platform::ActionsOnGoogle,
            SimpleResponses {
                simple_responses: vec![SimpleResponse::new("Hello", "", "")],
            },
        );
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "platform": "ACTIONS_ON_GOOGLE",
                "simpleResponses": {"simpleResponses": [{"textToSpeech": "Hello"}]}
            })
        );
    }

    #[test]
    fn payload_envelope_nests_under_google() {
        let envelope =
            MessageEnvelope::new(Platform::ActionsOnGoogle, Payload::from(ActionsPayload::new()));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["payload"]["google"]["expectUserResponse"], json!(true));
        assert_eq!(envelope.kind(), MessageKind::Payload);
    }

    #[test]
    fn deserializes_dialogflow_message() {
        let envelope: MessageEnvelope = serde_json::from_value(json!({
            "platform": "FACEBOOK",
            "quickReplies": {"title": "Pick", "quickReplies": ["a", "b"]}
        }))
        .unwrap();
        assert_eq!(envelope.platform, Platform::Facebook);
        assert_eq!(envelope.kind(), MessageKind::QuickReplies);
    }

    #[test]
    fn missing_platform_is_unspecified() {
        let envelope: MessageEnvelope =
            serde_json::from_value(json!({"text": {"text": ["hi"]}})).unwrap();
        assert_eq!(envelope.platform, Platform::Unspecified);
    }
}
