// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session entity types: per-session overrides of the agent's entity
//! vocabulary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityOverrideMode {
    #[default]
    EntityOverrideModeUnspecified,
    /// Replace the agent's entities for this session.
    EntityOverrideModeOverride,
    /// Add to the agent's entities for this session.
    EntityOverrideModeSupplement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl Entity {
    pub fn new<I, S>(value: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Named as `<session>/entityTypes/<entity name>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntityType {
    pub name: String,
    pub entity_override_mode: EntityOverrideMode,
    pub entities: Vec<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn override_mode_wire_names() {
        let entity_type = SessionEntityType {
            name: "projects/p/agent/sessions/s/entityTypes/fruit".into(),
            entity_override_mode: EntityOverrideMode::EntityOverrideModeSupplement,
            entities: vec![Entity::new("apple", ["apple", "green apple"])],
        };
        assert_eq!(
            serde_json::to_value(&entity_type).unwrap(),
            json!({
                "name": "projects/p/agent/sessions/s/entityTypes/fruit",
                "entityOverrideMode": "ENTITY_OVERRIDE_MODE_SUPPLEMENT",
                "entities": [{"value": "apple", "synonyms": ["apple", "green apple"]}]
            })
        );
    }
}
