// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The webhook response document and its builder operations.
//!
//! Every content operation writes twice: a platform-neutral envelope goes into
//! `fulfillmentMessages`, and vendor-bound content is forwarded to the single
//! [`ActionsPayload`] of the response. When payload mirroring is enabled the
//! payload is also carried as a `payload` envelope, refreshed after every
//! change so the two never disagree.
//!
//! Envelopes pass through one gate, [`WebhookResponse::add_fulfillment_message`]:
//! - `simple_responses` envelopes are always appended;
//! - anything else is dropped until the platform has a `simple_responses`
//!   envelope;
//! - a `payload` envelope replaces the platform's existing one in place, and
//!   its payload becomes the document payload.

use fulfil_actions::{ActionsPayload, ImageSize, Item, OrderUpdate, SystemIntent};
use fulfil_config::WebhookConfig;
use fulfil_core::content::{
    BasicCard, BrowseCarouselCard, BrowseCarouselCardItem, CarouselItem, CarouselSelect, Image,
    LinkOutSuggestion, ListItem, ListSelect, MediaContent, MediaObject, QuickReplies,
    SimpleResponse, SimpleResponses, Suggestions, TableCard, Text,
};
use fulfil_core::{
    ApiVersion, FulfilError, IdentityVerifier, ImageDisplayOptions, MessageKind, Parameters,
    Platform, ResponseMediaType,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::context::{Context, ContextRegistry};
use crate::entity::{Entity, EntityOverrideMode, SessionEntityType};
use crate::envelope::{MessageContent, MessageEnvelope, Payload};
use crate::event::EventInput;
use crate::request::InboundRequest;
use crate::storage::encode_user_storage;

/// Per-document settings, usually taken from [`WebhookConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseOptions {
    pub version: ApiVersion,
    pub create_payload_object: bool,
}

impl From<&WebhookConfig> for ResponseOptions {
    fn from(config: &WebhookConfig) -> Self {
        Self {
            version: config.version,
            create_payload_object: config.create_payload_object,
        }
    }
}

/// Vendor content is forwarded for the vendor platform, and for kinds that
/// only the vendor can render whatever platform they were tagged with.
fn forwards(platform: Platform, kind: MessageKind) -> bool {
    platform.is_vendor() || kind.is_vendor_exclusive()
}

/// Outbound fulfillment document for one request turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    fulfillment_text: String,
    fulfillment_messages: Vec<MessageEnvelope>,
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Payload>,
    output_contexts: ContextRegistry,
    followup_event_input: Option<EventInput>,
    #[serde(rename = "session_entity_types")]
    session_entity_types: Vec<SessionEntityType>,
    #[serde(skip)]
    session_id: String,
    #[serde(skip)]
    options: ResponseOptions,
}

impl WebhookResponse {
    /// Empty document for `session_id`. With mirroring enabled the vendor
    /// payload exists from the start.
    pub fn new(session_id: impl Into<String>, options: ResponseOptions) -> Self {
        Self {
            fulfillment_text: String::new(),
            fulfillment_messages: Vec::new(),
            source: None,
            payload: options.create_payload_object.then(Payload::default),
            output_contexts: ContextRegistry::new(),
            followup_event_input: None,
            session_entity_types: Vec::new(),
            session_id: session_id.into(),
            options,
        }
    }

    pub fn for_request(request: &InboundRequest, options: ResponseOptions) -> Self {
        Self::new(request.session_id(), options)
    }

    /// Parse `json`, verify its identity token when a verifier is given, and
    /// start an empty response for it.
    pub async fn from_request_json(
        json: &str,
        options: ResponseOptions,
        verifier: Option<&dyn IdentityVerifier>,
    ) -> Result<(InboundRequest, Self), FulfilError> {
        let mut request = InboundRequest::from_json_str(json, options.version)?;
        if let Some(verifier) = verifier {
            request.verify_identity(verifier).await?;
        }
        let response = Self::for_request(&request, options);
        Ok((request, response))
    }

    pub fn options(&self) -> ResponseOptions {
        self.options
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    // --- fulfillment text and source ---

    pub fn fulfillment_text(&self) -> &str {
        &self.fulfillment_text
    }

    pub fn set_fulfillment_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.fulfillment_text = text.into();
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn add_source(&mut self, source: impl Into<String>) -> &mut Self {
        self.source = Some(source.into());
        self
    }

    // --- message list ---

    pub fn fulfillment_messages(&self) -> &[MessageEnvelope] {
        &self.fulfillment_messages
    }

    /// Append `envelope`, subject to the spoken-response gate and the
    /// single-payload rule. Returns the message list.
    pub fn add_fulfillment_message(&mut self, envelope: MessageEnvelope) -> &[MessageEnvelope] {
        let platform = envelope.platform;
        let kind = envelope.kind();

        if kind != MessageKind::SimpleResponses
            && !self.has_fulfillment_message_type(platform, MessageKind::SimpleResponses)
        {
            debug!(
                platform = %platform,
                kind = %kind,
                "message dropped: no spoken response for platform yet"
            );
            return &self.fulfillment_messages;
        }

        // An accepted payload envelope becomes the document payload.
        if let MessageContent::Payload(incoming) = &envelope.content {
            self.payload = Some(incoming.clone());
            self.refresh_payload_envelopes();
            if self.has_fulfillment_message_type(platform, kind) {
                trace!(platform = %platform, "payload message replaced");
                return &self.fulfillment_messages;
            }
        }

        trace!(platform = %platform, kind = %kind, "message appended");
        self.fulfillment_messages.push(envelope);
        &self.fulfillment_messages
    }

    /// Run each envelope through [`Self::add_fulfillment_message`] in order.
    pub fn add_fulfillment_messages(
        &mut self,
        envelopes: impl IntoIterator<Item = MessageEnvelope>,
    ) -> &[MessageEnvelope] {
        for envelope in envelopes {
            self.add_fulfillment_message(envelope);
        }
        &self.fulfillment_messages
    }

    /// Clear the message list. The vendor payload itself is kept.
    pub fn delete_messages(&mut self) -> &mut Self {
        self.fulfillment_messages.clear();
        self
    }

    pub fn has_fulfillment_message_type(&self, platform: Platform, kind: MessageKind) -> bool {
        self.fulfillment_messages
            .iter()
            .any(|message| message.matches(platform, kind))
    }

    /// First envelope for `platform` holding `kind` content.
    pub fn get_fulfillment_message(
        &self,
        platform: Platform,
        kind: MessageKind,
    ) -> Result<&MessageEnvelope, FulfilError> {
        self.fulfillment_messages
            .iter()
            .find(|message| message.matches(platform, kind))
            .ok_or(FulfilError::NotFound { platform, kind })
    }

    // --- vendor payload ---

    pub fn payload(&self) -> Option<&ActionsPayload> {
        self.payload.as_ref().map(|payload| &payload.google)
    }

    fn vendor_payload(&mut self) -> &mut ActionsPayload {
        &mut self.payload.get_or_insert_with(Payload::default).google
    }

    fn refresh_payload_envelopes(&mut self) {
        let Some(payload) = &self.payload else {
            return;
        };
        for message in &mut self.fulfillment_messages {
            if let MessageContent::Payload(existing) = &mut message.content {
                *existing = payload.clone();
            }
        }
    }

    /// Push the current payload into every `payload` envelope and, with
    /// mirroring on, make sure `platform` has one.
    fn mirror_payload(&mut self, platform: Platform) {
        self.refresh_payload_envelopes();
        let Some(payload) = self.payload.clone() else {
            return;
        };
        if self.options.create_payload_object
            && !self.has_fulfillment_message_type(platform, MessageKind::Payload)
        {
            self.add_fulfillment_message(MessageEnvelope::new(platform, payload));
        }
    }

    /// Replace the vendor payload wholesale.
    pub fn add_payload(&mut self, payload: ActionsPayload) -> &mut Self {
        self.payload = Some(Payload::from(payload));
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    pub fn add_system_intent(&mut self, intent: SystemIntent) -> &mut Self {
        self.vendor_payload().add_system_intent(intent);
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    /// Append ready-made vendor items to the payload's rich response.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> &mut Self {
        self.vendor_payload().add_items(items);
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    pub fn add_structured_response(&mut self, order_update: OrderUpdate) -> &mut Self {
        self.vendor_payload().add_structured_response(order_update);
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    pub fn set_expect_user_response(&mut self, expect: bool) -> &mut Self {
        self.vendor_payload().set_expect_user_response(expect);
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    /// Store `storage` in the payload's opaque `userStorage` string.
    pub fn set_user_storage(&mut self, storage: &Parameters) -> &mut Self {
        let encoded = encode_user_storage(storage);
        self.vendor_payload().set_user_storage(encoded);
        self.mirror_payload(Platform::ActionsOnGoogle);
        self
    }

    // --- content operations ---

    /// Add a spoken/text reply and make it the fulfillment text.
    ///
    /// On the vendor platform a `simple_responses` envelope is registered
    /// first, which opens the gate for the `text` envelope that follows.
    /// Registering the spoken response first keeps the first text reply for
    /// that platform; appending the `text` envelope first would have it
    /// dropped by the gate.
    pub fn add_text_message(
        &mut self,
        platform: Platform,
        text_to_speech: impl Into<String>,
        ssml: impl Into<String>,
        display_text: impl Into<String>,
    ) -> &mut Self {
        let text_to_speech = text_to_speech.into();
        let ssml = ssml.into();
        let display_text = display_text.into();
        debug!(platform = %platform, "adding text message");

        self.fulfillment_text = if display_text.is_empty() {
            text_to_speech.clone()
        } else {
            display_text.clone()
        };

        if platform.is_vendor() {
            let spoken = SimpleResponse::new(&text_to_speech, &ssml, &display_text);
            self.add_fulfillment_message(MessageEnvelope::new(
                platform,
                SimpleResponses {
                    simple_responses: vec![spoken],
                },
            ));
        }
        self.add_fulfillment_message(MessageEnvelope::new(
            platform,
            Text::new(text_to_speech.clone()),
        ));

        if forwards(platform, MessageKind::SimpleResponses) {
            self.vendor_payload()
                .add_simple_response(text_to_speech, ssml, display_text);
        }
        self.mirror_payload(platform);
        self
    }

    pub fn add_image(
        &mut self,
        platform: Platform,
        uri: impl Into<String>,
        accessibility_text: impl Into<String>,
    ) -> &mut Self {
        let image = Image::new(uri, accessibility_text);
        debug!(platform = %platform, uri = %image.image_uri, "adding image");
        self.add_fulfillment_message(MessageEnvelope::new(platform, image));
        self.mirror_payload(platform);
        self
    }

    /// Quick replies; on the vendor platform they also become suggestion
    /// chips.
    pub fn add_quick_replies<I, S>(
        &mut self,
        platform: Platform,
        title: impl Into<String>,
        replies: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quick_replies = QuickReplies::new(title, replies);
        debug!(
            platform = %platform,
            count = quick_replies.quick_replies.len(),
            "adding quick replies"
        );
        let titles = quick_replies.quick_replies.clone();
        self.add_fulfillment_message(MessageEnvelope::new(platform, quick_replies));

        if platform.is_vendor() {
            let chips: Suggestions = titles.iter().cloned().collect();
            self.add_fulfillment_message(MessageEnvelope::new(platform, chips));
        }
        if forwards(platform, MessageKind::Suggestions) {
            self.vendor_payload().add_suggestions(titles);
        }
        self.mirror_payload(platform);
        self
    }

    /// A card. Every platform gets the generic card; the vendor platform also
    /// gets it as a basic card, in the message list and in the payload.
    pub fn add_card(&mut self, platform: Platform, card: BasicCard) -> &mut Self {
        debug!(platform = %platform, title = %card.title, "adding card");
        self.add_fulfillment_message(MessageEnvelope::new(platform, card.to_card()));

        if forwards(platform, MessageKind::BasicCard) {
            self.vendor_payload()
                .add_basic_card(&card, ImageDisplayOptions::Unspecified);
        }
        if platform.is_vendor() {
            self.add_fulfillment_message(MessageEnvelope::new(platform, card));
        }
        self.mirror_payload(platform);
        self
    }

    pub fn add_link_out_suggestion(
        &mut self,
        platform: Platform,
        uri: impl Into<String>,
        destination_name: impl Into<String>,
    ) -> &mut Self {
        let suggestion = LinkOutSuggestion::new(destination_name, uri);
        debug!(
            platform = %platform,
            destination = %suggestion.destination_name,
            "adding link-out suggestion"
        );
        if forwards(platform, MessageKind::LinkOutSuggestion) {
            self.vendor_payload()
                .add_link_out_suggestion(&suggestion.uri, &suggestion.destination_name);
        }
        self.add_fulfillment_message(MessageEnvelope::new(platform, suggestion));
        self.mirror_payload(platform);
        self
    }

    pub fn add_list_select(
        &mut self,
        platform: Platform,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        items: Vec<ListItem>,
    ) -> &mut Self {
        debug!(platform = %platform, count = items.len(), "adding list select");
        let list = ListSelect {
            title: title.into(),
            items,
            subtitle: subtitle.into(),
        };
        self.add_fulfillment_message(MessageEnvelope::new(platform, list));
        self.mirror_payload(platform);
        self
    }

    /// Selectable carousel. The vendor payload has no equivalent, so this
    /// fails with [`FulfilError::UnsupportedOperation`] for the vendor
    /// platform, before anything is changed.
    pub fn add_carousel_select(
        &mut self,
        platform: Platform,
        items: Vec<CarouselItem>,
    ) -> Result<&mut Self, FulfilError> {
        let carousel = CarouselSelect { items };
        if forwards(platform, MessageKind::CarouselSelect) {
            match self.payload.as_mut() {
                Some(payload) => {
                    payload.google.add_carousel_select(&carousel)?;
                }
                None => {
                    ActionsPayload::new().add_carousel_select(&carousel)?;
                }
            }
        }
        debug!(
            platform = %platform,
            count = carousel.items.len(),
            "adding carousel select"
        );
        self.add_fulfillment_message(MessageEnvelope::new(platform, carousel));
        self.mirror_payload(platform);
        Ok(self)
    }

    pub fn add_carousel_browse_card(
        &mut self,
        platform: Platform,
        image_display_options: ImageDisplayOptions,
        items: Vec<BrowseCarouselCardItem>,
    ) -> &mut Self {
        let card = BrowseCarouselCard {
            items,
            image_display_options,
        };
        debug!(platform = %platform, count = card.items.len(), "adding browse carousel");
        if forwards(platform, MessageKind::CarouselBrowseCard) {
            self.vendor_payload().add_carousel_browse(&card);
        }
        self.add_fulfillment_message(MessageEnvelope::new(platform, card));
        self.mirror_payload(platform);
        self
    }

    /// Table card. `image_size` is only used by the vendor payload.
    pub fn add_table_card(
        &mut self,
        platform: Platform,
        card: TableCard,
        image_size: Option<ImageSize>,
    ) -> &mut Self {
        debug!(platform = %platform, rows = card.rows.len(), "adding table card");
        if forwards(platform, MessageKind::TableCard) {
            self.vendor_payload().add_table_card(&card, image_size);
        }
        self.add_fulfillment_message(MessageEnvelope::new(platform, card));
        self.mirror_payload(platform);
        self
    }

    pub fn add_media(
        &mut self,
        platform: Platform,
        media_type: ResponseMediaType,
        media_objects: Vec<MediaObject>,
    ) -> &mut Self {
        let media = MediaContent {
            media_type,
            media_objects,
        };
        debug!(platform = %platform, count = media.media_objects.len(), "adding media");
        if forwards(platform, MessageKind::Media) {
            self.vendor_payload().add_media_response(&media);
        }
        self.add_fulfillment_message(MessageEnvelope::new(platform, media));
        self.mirror_payload(platform);
        self
    }

    // --- contexts, entities, events ---

    pub fn contexts(&self) -> &[Context] {
        self.output_contexts.as_slice()
    }

    /// Insert or update an output context; see [`ContextRegistry::add`].
    pub fn add_context(
        &mut self,
        name: &str,
        lifespan: u32,
        parameters: Parameters,
    ) -> &[Context] {
        self.output_contexts.add(name, lifespan, parameters)
    }

    /// Update an existing output context. `false` if there is none.
    pub fn update_context(&mut self, name: &str, lifespan: u32, parameters: Parameters) -> bool {
        self.output_contexts.update(name, lifespan, parameters)
    }

    /// Remove the named contexts, or all of them for an empty list.
    pub fn delete_contexts<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        self.output_contexts.delete(names)
    }

    pub fn session_entity_types(&self) -> &[SessionEntityType] {
        &self.session_entity_types
    }

    /// Append a session entity type named after this response's session.
    pub fn add_session_entity(
        &mut self,
        entity_name: &str,
        override_mode: EntityOverrideMode,
        entities: Vec<Entity>,
    ) -> &mut Self {
        let name = format!("{}/entityTypes/{entity_name}", self.session_id);
        debug!(entity_type = %name, mode = %override_mode, "adding session entity type");
        self.session_entity_types.push(SessionEntityType {
            name,
            entity_override_mode: override_mode,
            entities,
        });
        self
    }

    pub fn followup_event_input(&self) -> Option<&EventInput> {
        self.followup_event_input.as_ref()
    }

    pub fn add_followup_event_input(
        &mut self,
        name: impl Into<String>,
        language_code: impl Into<String>,
        parameters: Parameters,
    ) -> &mut Self {
        self.followup_event_input = Some(EventInput::new(name, language_code, parameters));
        self
    }
}
