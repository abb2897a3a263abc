// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `fulfil inspect`: parse a request document and show what the library
//! extracts from it.

use std::path::Path;

use fulfil_config::FulfilConfig;
use fulfil_core::{ApiVersion, FulfilError, IdentityVerifier};
use fulfil_dialogflow::{InboundRequest, ResponseOptions, WebhookResponse};
use fulfil_identity::GoogleIdentityVerifier;
use serde_json::{Value, json};
use tracing::{info, warn};

/// Extracted request fields plus the empty response a handler would start
/// from.
pub fn summarize(request: &InboundRequest, response: &WebhookResponse) -> Result<Value, FulfilError> {
    let response = serde_json::to_value(response)
        .map_err(|e| FulfilError::malformed(format!("response is not serializable: {e}")))?;
    Ok(json!({
        "request": {
            "version": request.version().to_string(),
            "responseId": request.response_id(),
            "session": request.session_id(),
            "action": request.action(),
            "intent": request.intent_display_name(),
            "queryText": request.query_text(),
            "languageCode": request.language_code(),
            "parameters": request.parameters(),
            "contexts": request.contexts(),
            "source": request.source(),
            "capabilities": request.capabilities(),
            "userVerificationStatus": request.user_verification_status(),
            "userStorage": request.user_storage(),
            "hasIdToken": request.id_token().is_some(),
            "user": {
                "givenName": request.user_given_name(),
                "familyName": request.user_family_name(),
                "email": request.user_email(),
            },
        },
        "response": response,
    }))
}

pub async fn run(
    path: &Path,
    version: Option<ApiVersion>,
    verify: bool,
    config: &FulfilConfig,
) -> Result<Value, FulfilError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| FulfilError::malformed(format!("cannot read {}: {e}", path.display())))?;

    let mut options = ResponseOptions::from(&config.webhook);
    if let Some(version) = version {
        options.version = version;
    }

    let verifier = if verify {
        Some(GoogleIdentityVerifier::new(&config.identity)?)
    } else {
        None
    };
    let verifier = verifier.as_ref().map(|v| v as &dyn IdentityVerifier);

    let (request, response) = WebhookResponse::from_request_json(&json, options, verifier).await?;
    if !verify && request.id_token().is_some() {
        warn!("request carries an identity token; pass --verify to check it");
    }
    info!(path = %path.display(), action = %request.action(), "request inspected");
    summarize(&request, &response)
}
