// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dialogflow webhook support for Fulfil.
//!
//! [`InboundRequest`] is a read-only view of one fulfillment request, in
//! either schema version. [`WebhookResponse`] builds the reply: fulfillment
//! text, per-platform messages, output contexts, session entity types, a
//! follow-up event, and the vendor payload.

pub mod context;
pub mod entity;
pub mod envelope;
pub mod event;
pub mod request;
pub mod response;
pub mod storage;

pub use context::{Context, ContextRegistry};
pub use entity::{Entity, EntityOverrideMode, SessionEntityType};
pub use envelope::{MessageContent, MessageEnvelope, Payload};
pub use event::EventInput;
pub use request::{InboundRequest, UserProfile};
pub use response::{ResponseOptions, WebhookResponse};
pub use storage::{encode_user_storage, parse_user_storage};
