// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook request documents for tests.
//!
//! `RequestFixture` renders the same logical request as either a v2
//! (`queryResult`) or v1 (`result`) document, so one scenario can be run
//! against both readers.

use fulfil_core::{ApiVersion, Parameters};
use serde_json::{Value, json};

/// Builder for an inbound request document.
#[derive(Debug, Clone)]
pub struct RequestFixture {
    session: String,
    action: String,
    query_text: String,
    language_code: String,
    intent_name: String,
    parameters: Parameters,
    contexts: Vec<(String, u32, Parameters)>,
    source: Option<String>,
    capabilities: Vec<String>,
    user_storage: Option<Value>,
    id_token: Option<String>,
}

impl Default for RequestFixture {
    fn default() -> Self {
        Self {
            session: "projects/fixture/agent/sessions/session-1".to_string(),
            action: String::new(),
            query_text: String::new(),
            language_code: "en".to_string(),
            intent_name: String::new(),
            parameters: Parameters::new(),
            contexts: Vec::new(),
            source: None,
            capabilities: Vec::new(),
            user_storage: None,
            id_token: None,
        }
    }
}

impl RequestFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn query_text(mut self, text: impl Into<String>) -> Self {
        self.query_text = text.into();
        self
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = code.into();
        self
    }

    pub fn intent_name(mut self, name: impl Into<String>) -> Self {
        self.intent_name = name.into();
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn context(mut self, name: impl Into<String>, lifespan: u32, parameters: Parameters) -> Self {
        self.contexts.push((name.into(), lifespan, parameters));
        self
    }

    /// Mark the request as coming from the vendor integration.
    pub fn from_google(mut self) -> Self {
        self.source = Some("google".to_string());
        self
    }

    pub fn capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.push(name.into());
        self
    }

    /// Raw `userStorage` value, placed as-is (usually a JSON string).
    pub fn user_storage(mut self, storage: Value) -> Self {
        self.user_storage = Some(storage);
        self
    }

    pub fn id_token(mut self, token: impl Into<String>) -> Self {
        self.id_token = Some(token.into());
        self
    }

    fn device_payload(&self) -> Value {
        let mut user = serde_json::Map::new();
        if let Some(storage) = &self.user_storage {
            user.insert("userStorage".into(), storage.clone());
        }
        if let Some(token) = &self.id_token {
            user.insert("idToken".into(), json!(token));
        }
        let capabilities: Vec<Value> = self
            .capabilities
            .iter()
            .map(|name| json!({ "name": name }))
            .collect();
        json!({
            "user": user,
            "surface": { "capabilities": capabilities },
        })
    }

    /// Render the document in the given schema version.
    pub fn to_value(&self, version: ApiVersion) -> Value {
        match version {
            ApiVersion::V2 => self.to_v2(),
            ApiVersion::V1 => self.to_v1(),
        }
    }

    pub fn to_json(&self, version: ApiVersion) -> String {
        self.to_value(version).to_string()
    }

    fn to_v2(&self) -> Value {
        let contexts: Vec<Value> = self
            .contexts
            .iter()
            .map(|(name, lifespan, parameters)| {
                json!({ "name": name, "lifespanCount": lifespan, "parameters": parameters })
            })
            .collect();
        let mut document = json!({
            "responseId": "fixture-response",
            "session": self.session,
            "queryResult": {
                "queryText": self.query_text,
                "action": self.action,
                "parameters": self.parameters,
                "languageCode": self.language_code,
                "intent": { "displayName": self.intent_name },
                "outputContexts": contexts,
            },
        });
        document["originalDetectIntentRequest"] = json!({
            "source": self.source,
            "payload": self.device_payload(),
        });
        document
    }

    fn to_v1(&self) -> Value {
        let contexts: Vec<Value> = self
            .contexts
            .iter()
            .map(|(name, lifespan, parameters)| {
                json!({ "name": name, "lifespan": lifespan, "parameters": parameters })
            })
            .collect();
        let mut document = json!({
            "id": "fixture-response",
            "sessionId": self.session,
            "lang": self.language_code,
            "result": {
                "resolvedQuery": self.query_text,
                "action": self.action,
                "parameters": self.parameters,
                "metadata": { "intentName": self.intent_name },
                "contexts": contexts,
            },
        });
        document["originalRequest"] = json!({
            "source": self.source,
            "payload": self.device_payload(),
        });
        document
    }
}
