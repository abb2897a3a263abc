// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use fulfil_core::Parameters;
use serde::{Deserialize, Serialize};

/// Follow-up event that makes Dialogflow trigger another intent instead of
/// replying.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub name: String,
    pub language_code: String,
    #[serde(default)]
    pub parameters: Parameters,
}

impl EventInput {
    pub fn new(
        name: impl Into<String>,
        language_code: impl Into<String>,
        parameters: Parameters,
    ) -> Self {
        Self {
            name: name.into(),
            language_code: language_code.into(),
            parameters,
        }
    }
}
