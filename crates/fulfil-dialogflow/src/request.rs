// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of inbound webhook requests.
//!
//! Dialogflow v2 and v1 name the same things differently (`queryResult` /
//! `result`, `session` / `sessionId`, `originalDetectIntentRequest` /
//! `originalRequest`). The configured [`ApiVersion`] picks which name is
//! tried first; the other is the fallback.

use fulfil_core::{ApiVersion, FulfilError, IdentityVerifier, Parameters};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::context::Context;
use crate::storage::parse_user_storage;

const WELCOME_ACTION: &str = "input.welcome";

/// Profile of the signed-in user. Empty until
/// [`InboundRequest::verify_identity`] succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
}

/// Read-only view of an inbound fulfillment request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundRequest {
    version: ApiVersion,
    response_id: Option<String>,
    session_id: String,
    action: String,
    parameters: Parameters,
    query_text: String,
    language_code: String,
    intent_display_name: String,
    contexts: Vec<Context>,
    source: Option<String>,
    capabilities: Vec<String>,
    user_verification_status: String,
    user_storage: Parameters,
    id_token: Option<String>,
    user: UserProfile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    response_id: Option<String>,
    id: Option<String>,
    session: Option<String>,
    session_id: Option<String>,
    lang: Option<String>,
    query_result: Option<WireResult>,
    result: Option<WireResult>,
    original_detect_intent_request: Option<WireOriginal>,
    original_request: Option<WireOriginal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResult {
    action: Option<String>,
    parameters: Option<Parameters>,
    query_text: Option<String>,
    resolved_query: Option<String>,
    language_code: Option<String>,
    intent: Option<WireIntent>,
    metadata: Option<WireMetadata>,
    output_contexts: Option<Vec<Context>>,
    contexts: Option<Vec<Context>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireIntent {
    display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMetadata {
    intent_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireOriginal {
    source: Option<String>,
    payload: Option<WireDevicePayload>,
}

#[derive(Debug, Default, Deserialize)]
struct WireDevicePayload {
    user: Option<WireUser>,
    surface: Option<WireSurface>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    user_verification_status: Option<String>,
    user_storage: Option<Value>,
    id_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireSurface {
    #[serde(default)]
    capabilities: Vec<WireCapability>,
}

#[derive(Debug, Deserialize)]
struct WireCapability {
    name: String,
}

/// The value under the configured version's key, else the other version's.
fn pick<T>(version: ApiVersion, v2: Option<T>, v1: Option<T>) -> Option<T> {
    match version {
        ApiVersion::V2 => v2.or(v1),
        ApiVersion::V1 => v1.or(v2),
    }
}

impl InboundRequest {
    /// Parse a request document.
    ///
    /// Fails with [`FulfilError::MalformedInput`] when the document has no
    /// query result, or when a field has the wrong JSON type.
    pub fn from_value(document: Value, version: ApiVersion) -> Result<Self, FulfilError> {
        if !document.is_object() {
            return Err(FulfilError::malformed("request document must be a JSON object"));
        }
        let wire: WireRequest = serde_json::from_value(document)
            .map_err(|err| FulfilError::malformed(format!("request document: {err}")))?;

        let result = pick(version, wire.query_result, wire.result).ok_or_else(|| {
            FulfilError::malformed("request has neither `queryResult` nor `result`")
        })?;
        let original = pick(
            version,
            wire.original_detect_intent_request,
            wire.original_request,
        )
        .unwrap_or_default();

        let mut action = result.action.unwrap_or_default();
        if action == WELCOME_ACTION {
            action = "welcome".to_string();
        }

        let device = original.payload.unwrap_or_default();
        let user = device.user.unwrap_or_default();
        let user_storage = parse_user_storage(user.user_storage.as_ref())?;

        let request = Self {
            version,
            response_id: wire.response_id.or(wire.id),
            session_id: pick(version, wire.session, wire.session_id).unwrap_or_default(),
            action,
            parameters: result.parameters.unwrap_or_default(),
            query_text: pick(version, result.query_text, result.resolved_query)
                .unwrap_or_default(),
            language_code: result.language_code.or(wire.lang).unwrap_or_default(),
            intent_display_name: pick(
                version,
                result.intent.and_then(|intent| intent.display_name),
                result.metadata.and_then(|metadata| metadata.intent_name),
            )
            .unwrap_or_default(),
            contexts: pick(version, result.output_contexts, result.contexts).unwrap_or_default(),
            source: original.source,
            capabilities: device
                .surface
                .map(|surface| surface.capabilities.into_iter().map(|c| c.name).collect())
                .unwrap_or_default(),
            user_verification_status: user.user_verification_status.unwrap_or_default(),
            user_storage,
            id_token: user.id_token.filter(|token| !token.is_empty()),
            user: UserProfile::default(),
        };

        info!(
            version = %version,
            session = %request.session_id,
            action = %request.action,
            source = request.source.as_deref().unwrap_or(""),
            "webhook request parsed"
        );
        debug!(
            parameters = request.parameters.len(),
            contexts = request.contexts.len(),
            has_id_token = request.id_token.is_some(),
            "request details"
        );
        Ok(request)
    }

    /// Parse a request document from its JSON text.
    pub fn from_json_str(json: &str, version: ApiVersion) -> Result<Self, FulfilError> {
        let document: Value = serde_json::from_str(json)
            .map_err(|err| FulfilError::malformed(format!("request is not valid JSON: {err}")))?;
        Self::from_value(document, version)
    }

    /// Verify the request's identity token, if it has one, and fill in the
    /// user profile from its claims.
    ///
    /// Returns `Ok(false)` when there is no token to verify.
    pub async fn verify_identity(
        &mut self,
        verifier: &dyn IdentityVerifier,
    ) -> Result<bool, FulfilError> {
        let Some(token) = self.id_token.as_deref() else {
            return Ok(false);
        };
        let identity = verifier.verify_identity_token(token).await?;
        debug!(email = %identity.email, "identity token verified");
        self.user = UserProfile {
            given_name: identity.given_name,
            family_name: identity.family_name,
            email: identity.email,
        };
        Ok(true)
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn response_id(&self) -> Option<&str> {
        self.response_id.as_deref()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Detected action; `input.welcome` is reported as `welcome`.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn get_parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn intent_display_name(&self) -> &str {
        &self.intent_display_name
    }

    /// Contexts active when the request was made.
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Integration the request came through (`google`, `facebook`, ...).
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|capability| capability == name)
    }

    pub fn user_verification_status(&self) -> &str {
        &self.user_verification_status
    }

    pub fn user_storage(&self) -> &Parameters {
        &self.user_storage
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn user_given_name(&self) -> &str {
        &self.user.given_name
    }

    pub fn user_family_name(&self) -> &str {
        &self.user.family_name
    }

    pub fn user_email(&self) -> &str {
        &self.user.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v2_document() -> Value {
        json!({
            "responseId": "resp-1",
            "session": "projects/p/agent/sessions/s1",
            "queryResult": {
                "queryText": "GOOGLE_ASSISTANT_WELCOME",
                "action": "input.welcome",
                "parameters": {"city": "Paris"},
                "languageCode": "en-us",
                "intent": {"displayName": "Default Welcome Intent"},
                "outputContexts": [
                    {"name": "projects/p/agent/sessions/s1/contexts/actions_capability_screen_output"}
                ]
            },
            "originalDetectIntentRequest": {
                "source": "google",
                "payload": {
                    "surface": {"capabilities": [
                        {"name": "actions.capability.SCREEN_OUTPUT"},
                        {"name": "actions.capability.AUDIO_OUTPUT"}
                    ]},
                    "user": {
                        "userVerificationStatus": "VERIFIED",
                        "userStorage": "{\"visits\":2}"
                    }
                }
            }
        })
    }

    #[test]
    fn parses_v2_document() {
        let request = InboundRequest::from_value(v2_document(), ApiVersion::V2).unwrap();
        assert_eq!(request.response_id(), Some("resp-1"));
        assert_eq!(request.session_id(), "projects/p/agent/sessions/s1");
        assert_eq!(request.action(), "welcome");
        assert_eq!(request.get_parameter("city"), Some(&json!("Paris")));
        assert_eq!(request.query_text(), "GOOGLE_ASSISTANT_WELCOME");
        assert_eq!(request.language_code(), "en-us");
        assert_eq!(request.intent_display_name(), "Default Welcome Intent");
        assert_eq!(request.contexts().len(), 1);
        assert_eq!(request.source(), Some("google"));
        assert!(request.has_capability("actions.capability.SCREEN_OUTPUT"));
        assert_eq!(request.user_verification_status(), "VERIFIED");
        assert_eq!(request.user_storage()["visits"], json!(2));
        assert!(request.id_token().is_none());
        assert_eq!(request.user(), &UserProfile::default());
    }

    #[test]
    fn parses_v1_document() {
        let document = json!({
            "id": "v1-id",
            "sessionId": "abc",
            "lang": "de",
            "result": {
                "resolvedQuery": "hallo",
                "action": "greet",
                "parameters": {},
                "metadata": {"intentName": "Greeting"},
                "contexts": [{"name": "ctx", "lifespan": 3, "parameters": {"a": 1}}]
            },
            "originalRequest": {"source": "slack"}
        });
        let request = InboundRequest::from_value(document, ApiVersion::V1).unwrap();
        assert_eq!(request.response_id(), Some("v1-id"));
        assert_eq!(request.session_id(), "abc");
        assert_eq!(request.query_text(), "hallo");
        assert_eq!(request.language_code(), "de");
        assert_eq!(request.intent_display_name(), "Greeting");
        assert_eq!(request.contexts()[0].lifespan_count, 3);
        assert_eq!(request.source(), Some("slack"));
    }

    #[test]
    fn v2_reader_falls_back_to_v1_keys() {
        let document = json!({"sessionId": "s", "result": {"action": "a"}});
        let request = InboundRequest::from_value(document, ApiVersion::V2).unwrap();
        assert_eq!(request.session_id(), "s");
        assert_eq!(request.action(), "a");
    }

    #[test]
    fn missing_result_is_malformed() {
        let err = InboundRequest::from_value(json!({"session": "s"}), ApiVersion::V2).unwrap_err();
        assert!(matches!(err, FulfilError::MalformedInput(_)));
    }

    #[test]
    fn wrongly_typed_parameters_are_malformed() {
        let document = json!({"queryResult": {"parameters": ["not", "a", "map"]}});
        assert!(matches!(
            InboundRequest::from_value(document, ApiVersion::V2),
            Err(FulfilError::MalformedInput(_))
        ));
    }

    #[test]
    fn bad_user_storage_is_malformed() {
        let document = json!({
            "queryResult": {},
            "originalDetectIntentRequest": {"payload": {"user": {"userStorage": "not json"}}}
        });
        assert!(matches!(
            InboundRequest::from_value(document, ApiVersion::V2),
            Err(FulfilError::MalformedInput(_))
        ));
    }

    #[test]
    fn non_object_and_invalid_json_are_malformed() {
        assert!(InboundRequest::from_value(json!([]), ApiVersion::V2).is_err());
        assert!(InboundRequest::from_json_str("{", ApiVersion::V2).is_err());
    }

    #[test]
    fn null_fields_are_tolerated() {
        let document = json!({
            "session": null,
            "queryResult": {"action": null, "parameters": null},
            "originalDetectIntentRequest": null
        });
        let request = InboundRequest::from_value(document, ApiVersion::V2).unwrap();
        assert_eq!(request.action(), "");
        assert!(request.parameters().is_empty());
        assert!(request.source().is_none());
    }
}
