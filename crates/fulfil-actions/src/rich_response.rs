// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The vendor rich response: ordered items, suggestion chips and an optional
//! link-out chip.

use serde::{Deserialize, Serialize};

use crate::order::StructuredResponse;
use crate::types::{
    BasicCard, CarouselBrowse, LinkOutSuggestion, MediaResponse, SimpleResponse, Suggestion,
    TableCard,
};

/// One entry of `richResponse.items`. Serialized as a single-key object
/// naming the item type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Item {
    SimpleResponse(SimpleResponse),
    BasicCard(BasicCard),
    StructuredResponse(StructuredResponse),
    MediaResponse(MediaResponse),
    CarouselBrowse(CarouselBrowse),
    TableCard(TableCard),
}

impl Item {
    /// Wire name of the item type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SimpleResponse(_) => "simpleResponse",
            Self::BasicCard(_) => "basicCard",
            Self::StructuredResponse(_) => "structuredResponse",
            Self::MediaResponse(_) => "mediaResponse",
            Self::CarouselBrowse(_) => "carouselBrowse",
            Self::TableCard(_) => "tableCard",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_out_suggestion: Option<LinkOutSuggestion>,
}

impl RichResponse {
    pub fn push_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    pub fn add_simple_response(&mut self, response: SimpleResponse) {
        self.items.push(Item::SimpleResponse(response));
    }

    pub fn add_suggestions<I, S>(&mut self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions
            .extend(titles.into_iter().map(|title| Suggestion {
                title: title.into(),
            }));
    }

    /// Sets the single link-out chip, replacing any previous one.
    pub fn set_link_out_suggestion(&mut self, suggestion: LinkOutSuggestion) {
        self.link_out_suggestion = Some(suggestion);
    }

    /// Simple responses in item order.
    pub fn simple_responses(&self) -> impl Iterator<Item = &SimpleResponse> {
        self.items.iter().filter_map(|item| match item {
            Item::SimpleResponse(response) => Some(response),
            _ => None,
        })
    }
}
