// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Actions on Google payload schema for Fulfil.
//!
//! [`ActionsPayload`] is the aggregator that collects all vendor content of a
//! response. The leaf types in [`types`] mirror the vendor wire format and
//! know how to build themselves from the platform-neutral content in
//! `fulfil_core::content`.

pub mod intent;
pub mod order;
pub mod payload;
pub mod rich_response;
pub mod types;

pub use intent::SystemIntent;
pub use order::{OrderState, OrderUpdate, StructuredResponse};
pub use payload::ActionsPayload;
pub use rich_response::{Item, RichResponse};
pub use types::ImageSize;
