// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-neutral message content (the Dialogflow `Intent.Message` shapes).
//!
//! These are plain records. Field names follow the wire format exactly; the
//! vendor payload crate translates them into its own variants.

use serde::{Deserialize, Serialize};

use crate::types::{HorizontalAlignment, ImageDisplayOptions, ResponseMediaType, UrlTypeHint};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Text response. Dialogflow picks one of the variants at random.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: Vec<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: vec![text.into()],
        }
    }
}

/// An image with alternate text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub accessibility_text: String,
}

impl Image {
    pub fn new(image_uri: impl Into<String>, accessibility_text: impl Into<String>) -> Self {
        Self {
            image_uri: image_uri.into(),
            accessibility_text: accessibility_text.into(),
        }
    }
}

/// Action that opens a URI when a button is tapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenUriAction {
    pub uri: String,
}

/// Button used by basic cards and table cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub title: String,
    pub open_uri_action: OpenUriAction,
}

impl Button {
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open_uri_action: OpenUriAction { uri: uri.into() },
        }
    }
}

/// Button on a generic [`Card`]: a label and the text (or URI) sent back
/// when pressed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardButton {
    pub text: String,
    pub postback: String,
}

impl From<&Button> for CardButton {
    fn from(button: &Button) -> Self {
        Self {
            text: button.title.clone(),
            postback: button.open_uri_action.uri.clone(),
        }
    }
}

/// Generic card rendered by every integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_uri: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<CardButton>,
}

/// A title followed by a row of quick reply chips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplies {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub quick_replies: Vec<String>,
}

impl QuickReplies {
    pub fn new<I, S>(title: impl Into<String>, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            quick_replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

/// A spoken reply, optionally with SSML and a separate on-screen text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssml: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_text: String,
}

impl SimpleResponse {
    pub fn new(
        text_to_speech: impl Into<String>,
        ssml: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            text_to_speech: text_to_speech.into(),
            ssml: ssml.into(),
            display_text: display_text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponses {
    pub simple_responses: Vec<SimpleResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
}

impl Suggestion {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Suggestion chips shown beneath the last reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<Suggestion>,
}

impl<S: Into<String>> FromIterator<S> for Suggestions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            suggestions: iter.into_iter().map(Suggestion::new).collect(),
        }
    }
}

/// Chip that links out to an app or website.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutSuggestion {
    pub destination_name: String,
    pub uri: String,
}

impl LinkOutSuggestion {
    pub fn new(destination_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            destination_name: destination_name.into(),
            uri: uri.into(),
        }
    }
}

/// Card with optional image, formatted body text and link buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl BasicCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_formatted_text(mut self, formatted_text: impl Into<String>) -> Self {
        self.formatted_text = formatted_text.into();
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    /// The generic [`Card`] equivalent: image URI and buttons carried over,
    /// formatted text dropped.
    pub fn to_card(&self) -> Card {
        Card {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            image_uri: self
                .image
                .as_ref()
                .map(|image| image.image_uri.clone())
                .unwrap_or_default(),
            buttons: self.buttons.iter().map(CardButton::from).collect(),
        }
    }
}

/// Selection key and synonyms of a list or carousel item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectItemInfo {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub info: SelectItemInfo,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl ListItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            info: SelectItemInfo {
                key: key.into(),
                synonyms: Vec::new(),
            },
            title: title.into(),
            description: String::new(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSelect {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub items: Vec<ListItem>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
}

/// Item of a selectable carousel. Same shape as a list item.
pub type CarouselItem = ListItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselSelect {
    pub items: Vec<CarouselItem>,
}

/// URL opened by a browse carousel tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    pub url: String,
    #[serde(default)]
    pub url_type_hint: UrlTypeHint,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseCarouselCardItem {
    pub open_uri_action: OpenUrlAction,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub footer: String,
}

impl BrowseCarouselCardItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            open_uri_action: OpenUrlAction {
                url: url.into(),
                url_type_hint: UrlTypeHint::Unspecified,
            },
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

/// Horizontally scrolling carousel of link tiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseCarouselCard {
    pub items: Vec<BrowseCarouselCardItem>,
    #[serde(default)]
    pub image_display_options: ImageDisplayOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProperties {
    pub header: String,
    #[serde(default)]
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnProperties {
    pub fn new(header: impl Into<String>, horizontal_alignment: HorizontalAlignment) -> Self {
        Self {
            header: header.into(),
            horizontal_alignment,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCardCell {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCardRow {
    pub cells: Vec<TableCardCell>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub divider_after: bool,
}

impl TableCardRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|text| TableCardCell { text: text.into() })
                .collect(),
            divider_after: false,
        }
    }

    pub fn with_divider(mut self) -> Self {
        self.divider_after = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCard {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub column_properties: Vec<ColumnProperties>,
    pub rows: Vec<TableCardRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// One playable item of a media response. At most one of `large_image` and
/// `icon` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaObject {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Image>,
    pub content_url: String,
}

impl MediaObject {
    pub fn new(name: impl Into<String>, content_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_url: content_url.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_large_image(mut self, image: Image) -> Self {
        self.large_image = Some(image);
        self.icon = None;
        self
    }

    pub fn with_icon(mut self, image: Image) -> Self {
        self.icon = Some(image);
        self.large_image = None;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    #[serde(default)]
    pub media_type: ResponseMediaType,
    pub media_objects: Vec<MediaObject>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn basic_card_to_card_carries_image_and_buttons() {
        let card = BasicCard::new("Title")
            .with_subtitle("Sub")
            .with_formatted_text("*bold*")
            .with_image(Image::new("https://img", "alt"))
            .with_button(Button::new("Open", "https://site"));

        let generic = card.to_card();
        assert_eq!(generic.image_uri, "https://img");
        assert_eq!(
            generic.buttons,
            vec![CardButton {
                text: "Open".into(),
                postback: "https://site".into()
            }]
        );
    }

    #[test]
    fn wire_names_are_camel_case() {
        let item = BrowseCarouselCardItem::new("Docs", "https://docs").with_footer("f");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "openUriAction": {"url": "https://docs", "urlTypeHint": "URL_TYPE_HINT_UNSPECIFIED"},
                "title": "Docs",
                "footer": "f"
            })
        );
    }

    #[test]
    fn table_row_divider_omitted_when_false() {
        let row = serde_json::to_value(TableCardRow::new(["a", "b"])).unwrap();
        assert_eq!(row, json!({"cells": [{"text": "a"}, {"text": "b"}]}));

        let row = serde_json::to_value(TableCardRow::new(["a"]).with_divider()).unwrap();
        assert_eq!(row["dividerAfter"], json!(true));
    }

    #[test]
    fn media_object_keeps_one_image_variant() {
        let object = MediaObject::new("Song", "https://cdn/song.mp3")
            .with_icon(Image::new("https://icon", ""))
            .with_large_image(Image::new("https://large", ""));
        assert!(object.icon.is_none());
        assert_eq!(object.large_image.unwrap().image_uri, "https://large");
    }

    #[test]
    fn suggestions_collect_from_titles() {
        let chips: Suggestions = ["yes", "no"].into_iter().collect();
        assert_eq!(chips.suggestions[1].title, "no");
    }
}
