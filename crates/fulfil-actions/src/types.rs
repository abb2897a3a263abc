// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Actions on Google leaf types and their translation from the neutral schema.
//!
//! The vendor schema names things differently from Dialogflow's neutral one
//! (`url` instead of `imageUri`, `openUrlAction` instead of `openUriAction`,
//! `DEFAULT` instead of the unspecified sentinel). The `From` impls here are
//! the only place that translation happens.

use fulfil_core::content;
use fulfil_core::types::{HorizontalAlignment, UrlTypeHint};
use serde::{Deserialize, Serialize};

/// How an image is fitted into its container on the vendor surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageDisplayOptions {
    /// Fill the gaps with gray bars.
    #[default]
    Default,
    White,
    Cropped,
    BlurredBackground,
}

impl From<fulfil_core::ImageDisplayOptions> for ImageDisplayOptions {
    fn from(options: fulfil_core::ImageDisplayOptions) -> Self {
        use fulfil_core::ImageDisplayOptions as Neutral;
        match options {
            Neutral::Unspecified | Neutral::Gray => Self::Default,
            Neutral::White => Self::White,
            Neutral::Cropped => Self::Cropped,
            Neutral::BlurredBackground => Self::BlurredBackground,
        }
    }
}

/// Rendered image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub accessibility_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Image {
    pub fn with_size(mut self, size: Option<ImageSize>) -> Self {
        if let Some(size) = size {
            self.height = Some(size.height);
            self.width = Some(size.width);
        }
        self
    }
}

impl From<&content::Image> for Image {
    fn from(image: &content::Image) -> Self {
        Self {
            url: image.image_uri.clone(),
            accessibility_text: image.accessibility_text.clone(),
            height: None,
            width: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    pub url: String,
    #[serde(default)]
    pub url_type_hint: UrlTypeHint,
}

/// Vendor button: a title wrapping an "open URL" action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub title: String,
    pub open_url_action: OpenUrlAction,
}

impl From<&content::Button> for Button {
    fn from(button: &content::Button) -> Self {
        Self {
            title: button.title.clone(),
            open_url_action: OpenUrlAction {
                url: button.open_uri_action.uri.clone(),
                url_type_hint: UrlTypeHint::Unspecified,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssml: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_text: String,
}

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
    #[serde(default)]
    pub image_display_options: ImageDisplayOptions,
}

impl From<&content::BasicCard> for BasicCard {
    fn from(card: &content::BasicCard) -> Self {
        Self {
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            formatted_text: card.formatted_text.clone(),
            image: card.image.as_ref().map(Image::from),
            buttons: card.buttons.iter().map(Button::from).collect(),
            image_display_options: ImageDisplayOptions::Default,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselBrowseItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub footer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    pub open_url_action: OpenUrlAction,
}

impl From<&content::BrowseCarouselCardItem> for CarouselBrowseItem {
    fn from(item: &content::BrowseCarouselCardItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            footer: item.footer.clone(),
            image: item.image.as_ref().map(Image::from),
            open_url_action: OpenUrlAction {
                url: item.open_uri_action.url.clone(),
                url_type_hint: item.open_uri_action.url_type_hint,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselBrowse {
    pub items: Vec<CarouselBrowseItem>,
    #[serde(default)]
    pub image_display_options: ImageDisplayOptions,
}

impl From<&content::BrowseCarouselCard> for CarouselBrowse {
    fn from(card: &content::BrowseCarouselCard) -> Self {
        Self {
            items: card.items.iter().map(CarouselBrowseItem::from).collect(),
            image_display_options: card.image_display_options.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProperties {
    pub header: String,
    #[serde(default)]
    pub horizontal_alignment: HorizontalAlignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub divider_after: bool,
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
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl TableCard {
    /// Translates a neutral table card; `image_size` is only known to the
    /// vendor schema.
    pub fn from_neutral(card: &content::TableCard, image_size: Option<ImageSize>) -> Self {
        Self {
            title: card.title.clone(),
            subtitle: card.subtitle.clone(),
            image: card
                .image
                .as_ref()
                .map(|image| Image::from(image).with_size(image_size)),
            column_properties: card
                .column_properties
                .iter()
                .map(|column| ColumnProperties {
                    header: column.header.clone(),
                    horizontal_alignment: column.horizontal_alignment,
                })
                .collect(),
            rows: card
                .rows
                .iter()
                .map(|row| Row {
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| Cell {
                            text: cell.text.clone(),
                        })
                        .collect(),
                    divider_after: row.divider_after,
                })
                .collect(),
            buttons: card.buttons.iter().map(Button::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    MediaTypeUnspecified,
    Audio,
}

impl From<fulfil_core::ResponseMediaType> for MediaType {
    fn from(media_type: fulfil_core::ResponseMediaType) -> Self {
        match media_type {
            fulfil_core::ResponseMediaType::Unspecified => Self::MediaTypeUnspecified,
            fulfil_core::ResponseMediaType::Audio => Self::Audio,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaObject {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub content_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Image>,
}

impl From<&content::MediaObject> for MediaObject {
    fn from(object: &content::MediaObject) -> Self {
        Self {
            name: object.name.clone(),
            description: object.description.clone(),
            content_url: object.content_url.clone(),
            large_image: object.large_image.as_ref().map(Image::from),
            icon: object.icon.as_ref().map(Image::from),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub media_type: MediaType,
    pub media_objects: Vec<MediaObject>,
}

impl From<&content::MediaContent> for MediaResponse {
    fn from(media: &content::MediaContent) -> Self {
        Self {
            media_type: media.media_type.into(),
            media_objects: media.media_objects.iter().map(MediaObject::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutSuggestion {
    pub destination_name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unspecified_display_options_become_default() {
        assert_eq!(
            ImageDisplayOptions::from(fulfil_core::ImageDisplayOptions::Unspecified),
            ImageDisplayOptions::Default
        );
        assert_eq!(
            ImageDisplayOptions::from(fulfil_core::ImageDisplayOptions::Cropped),
            ImageDisplayOptions::Cropped
        );
        assert_eq!(
            serde_json::to_value(ImageDisplayOptions::Default).unwrap(),
            json!("DEFAULT")
        );
    }

    #[test]
    fn neutral_button_becomes_open_url_button() {
        let button = Button::from(&content::Button::new("Site", "https://example.com"));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({
                "title": "Site",
                "openUrlAction": {"url": "https://example.com", "urlTypeHint": "URL_TYPE_HINT_UNSPECIFIED"}
            })
        );
    }

    #[test]
    fn table_card_image_takes_size() {
        let neutral = content::TableCard {
            title: "Scores".into(),
            image: Some(content::Image::new("https://img", "logo")),
            rows: vec![content::TableCardRow::new(["a", "1"])],
            ..content::TableCard::default()
        };
        let card = TableCard::from_neutral(
            &neutral,
            Some(ImageSize {
                height: 40,
                width: 80,
            }),
        );
        let image = card.image.unwrap();
        assert_eq!(image.url, "https://img");
        assert_eq!((image.height, image.width), (Some(40), Some(80)));
        assert_eq!(card.rows[0].cells[1].text, "1");
    }

    #[test]
    fn media_type_translation() {
        assert_eq!(
            serde_json::to_value(MediaType::from(fulfil_core::ResponseMediaType::Unspecified))
                .unwrap(),
            json!("MEDIA_TYPE_UNSPECIFIED")
        );
    }
}
