// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System intents: asking the assistant to collect a specific kind of input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CONFIRMATION_INTENT: &str = "actions.intent.CONFIRMATION";
const CONFIRMATION_SPEC: &str = "type.googleapis.com/google.actions.v2.ConfirmationValueSpec";
const SIGN_IN_INTENT: &str = "actions.intent.SIGN_IN";
const SIGN_IN_SPEC: &str = "type.googleapis.com/google.actions.v2.SignInValueSpec";

/// Structured follow-up input request.
///
/// `data` carries the value spec for the intent, typed by its `@type` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemIntent {
    pub intent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl SystemIntent {
    /// An intent with no value spec.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            data: None,
        }
    }

    /// Attaches a value spec, tagging it with `type_url` under `@type`.
    pub fn with_data(mut self, type_url: &str, mut fields: Map<String, Value>) -> Self {
        fields.insert("@type".to_string(), Value::String(type_url.to_string()));
        self.data = Some(fields);
        self
    }

    /// Yes/no confirmation with the given prompt.
    pub fn confirmation(prompt: impl Into<String>) -> Self {
        let mut dialog_spec = Map::new();
        dialog_spec.insert(
            "requestConfirmationText".to_string(),
            Value::String(prompt.into()),
        );
        let mut fields = Map::new();
        fields.insert("dialogSpec".to_string(), Value::Object(dialog_spec));
        Self::new(CONFIRMATION_INTENT).with_data(CONFIRMATION_SPEC, fields)
    }

    /// Account-linking sign-in. `context` explains why sign-in is needed.
    pub fn sign_in(context: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("optContext".to_string(), Value::String(context.into()));
        Self::new(SIGN_IN_INTENT).with_data(SIGN_IN_SPEC, fields)
    }
}
