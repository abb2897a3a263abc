// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The vendor payload aggregator.
//!
//! A response carries at most one [`ActionsPayload`]. Every vendor-bound
//! piece of content funnels into its single [`RichResponse`]: simple
//! responses and cards become items, chips accumulate in `suggestions`.
//! Nothing here ever removes what an earlier call added.

use fulfil_core::FulfilError;
use fulfil_core::content;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intent::SystemIntent;
use crate::order::{OrderUpdate, StructuredResponse};
use crate::rich_response::{Item, RichResponse};
use crate::types::{
    BasicCard, CarouselBrowse, ImageSize, LinkOutSuggestion, MediaResponse, SimpleResponse,
    TableCard,
};

fn default_expect_user_response() -> bool {
    true
}

/// The `google` object of a Dialogflow payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsPayload {
    /// Keep the microphone open after this turn.
    #[serde(default = "default_expect_user_response")]
    pub expect_user_response: bool,

    /// Opaque JSON string persisted by the assistant across conversations.
    #[serde(default)]
    pub user_storage: String,

    #[serde(default)]
    pub rich_response: RichResponse,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_intent: Option<SystemIntent>,
}

impl Default for ActionsPayload {
    fn default() -> Self {
        Self {
            expect_user_response: default_expect_user_response(),
            user_storage: String::new(),
            rich_response: RichResponse::default(),
            system_intent: None,
        }
    }
}

impl ActionsPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rich_response(&self) -> &RichResponse {
        &self.rich_response
    }

    /// Replaces the whole rich response.
    pub fn set_rich_response(&mut self, rich_response: RichResponse) -> &mut Self {
        self.rich_response = rich_response;
        self
    }

    pub fn set_expect_user_response(&mut self, expect: bool) -> &mut Self {
        self.expect_user_response = expect;
        self
    }

    pub fn set_user_storage(&mut self, user_storage: impl Into<String>) -> &mut Self {
        self.user_storage = user_storage.into();
        self
    }

    /// Sets the system intent, replacing any earlier one.
    pub fn add_system_intent(&mut self, intent: SystemIntent) -> &mut Self {
        debug!(intent = %intent.intent, "payload system intent set");
        self.system_intent = Some(intent);
        self
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> &mut Self {
        self.rich_response.add_items(items);
        self
    }

    pub fn add_simple_response(
        &mut self,
        text_to_speech: impl Into<String>,
        ssml: impl Into<String>,
        display_text: impl Into<String>,
    ) -> &mut Self {
        self.rich_response.add_simple_response(SimpleResponse {
            text_to_speech: text_to_speech.into(),
            ssml: ssml.into(),
            display_text: display_text.into(),
        });
        debug!(
            items = self.rich_response.items.len(),
            "payload simple response added"
        );
        self
    }

    /// Adds a basic card. Neutral buttons and image are translated to their
    /// vendor shapes.
    pub fn add_basic_card(
        &mut self,
        card: &content::BasicCard,
        image_display_options: fulfil_core::ImageDisplayOptions,
    ) -> &mut Self {
        let mut vendor = BasicCard::from(card);
        vendor.image_display_options = image_display_options.into();
        self.push(Item::BasicCard(vendor))
    }

    pub fn add_table_card(
        &mut self,
        card: &content::TableCard,
        image_size: Option<ImageSize>,
    ) -> &mut Self {
        self.push(Item::TableCard(TableCard::from_neutral(card, image_size)))
    }

    pub fn add_carousel_browse(&mut self, card: &content::BrowseCarouselCard) -> &mut Self {
        self.push(Item::CarouselBrowse(CarouselBrowse::from(card)))
    }

    /// Selectable carousels have no rich-response item; this always fails
    /// and leaves the payload untouched.
    pub fn add_carousel_select(
        &mut self,
        _carousel: &content::CarouselSelect,
    ) -> Result<&mut Self, FulfilError> {
        Err(FulfilError::unsupported(
            "carousel select has no vendor rich-response item",
        ))
    }

    pub fn add_media_response(&mut self, media: &content::MediaContent) -> &mut Self {
        self.push(Item::MediaResponse(MediaResponse::from(media)))
    }

    pub fn add_structured_response(&mut self, order_update: OrderUpdate) -> &mut Self {
        self.push(Item::StructuredResponse(StructuredResponse { order_update }))
    }

    /// HTML regions (interactive canvas) are not part of this schema.
    pub fn add_html_region(&mut self) -> Result<&mut Self, FulfilError> {
        Err(FulfilError::unsupported("html region responses are not implemented"))
    }

    pub fn add_suggestions<I, S>(&mut self, titles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rich_response.add_suggestions(titles);
        debug!(
            suggestions = self.rich_response.suggestions.len(),
            "payload suggestions added"
        );
        self
    }

    pub fn add_link_out_suggestion(
        &mut self,
        url: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> &mut Self {
        self.rich_response.set_link_out_suggestion(LinkOutSuggestion {
            destination_name: destination_name.into(),
            url: url.into(),
        });
        self
    }

    fn push(&mut self, item: Item) -> &mut Self {
        debug!(item = item.type_name(), "payload item added");
        self.rich_response.push_item(item);
        self
    }
}
