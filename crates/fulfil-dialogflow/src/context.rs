// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output contexts and the per-response context registry.

use fulfil_core::Parameters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A named conversation-state marker.
///
/// `lifespan_count` is the number of turns the context survives; 0 expires
/// it after the current turn. Inbound v1 documents call it `lifespan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub name: String,
    #[serde(default, alias = "lifespan")]
    pub lifespan_count: u32,
    #[serde(default)]
    pub parameters: Parameters,
}

impl Context {
    pub fn new(name: impl Into<String>, lifespan_count: u32, parameters: Parameters) -> Self {
        Self {
            name: name.into(),
            lifespan_count,
            parameters,
        }
    }

    /// Merge `parameters` into this context; incoming keys win.
    pub fn update_parameters(&mut self, parameters: Parameters) {
        self.parameters.extend(parameters);
    }
}

/// Ordered list of contexts with at most one entry per name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextRegistry {
    contexts: Vec<Context>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Context] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|context| context.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|context| context.name == name)
    }

    /// Insert or update a context. An existing entry keeps its position,
    /// takes the new lifespan and merges the parameters.
    pub fn add(&mut self, name: &str, lifespan: u32, parameters: Parameters) -> &[Context] {
        match self.get_mut(name) {
            Some(context) => {
                context.lifespan_count = lifespan;
                context.update_parameters(parameters);
                debug!(context = name, lifespan, "context updated");
            }
            None => {
                self.contexts.push(Context::new(name, lifespan, parameters));
                debug!(context = name, lifespan, "context added");
            }
        }
        &self.contexts
    }

    /// Update an existing context only. Returns `false` when no context has
    /// that name.
    pub fn update(&mut self, name: &str, lifespan: u32, parameters: Parameters) -> bool {
        match self.get_mut(name) {
            Some(context) => {
                context.lifespan_count = lifespan;
                context.update_parameters(parameters);
                true
            }
            None => false,
        }
    }

    /// Remove the named contexts, or every context when `names` is empty.
    /// Unknown names are ignored. Always returns `true`.
    pub fn delete<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        if names.is_empty() {
            self.contexts.clear();
        } else {
            self.contexts
                .retain(|context| !names.iter().any(|name| name.as_ref() == context.name));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Parameters {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn re_adding_merges_parameters_and_keeps_position() {
        let mut registry = ContextRegistry::new();
        registry.add("first", 1, params(json!({"a": 1, "b": 1})));
        registry.add("second", 2, Parameters::new());
        let contexts = registry.add("first", 5, params(json!({"b": 2, "c": 3})));

        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].name, "first");
        assert_eq!(contexts[0].lifespan_count, 5);
        assert_eq!(
            serde_json::Value::Object(contexts[0].parameters.clone()),
            json!({"a": 1, "b": 2, "c": 3})
        );
    }

    #[test]
    fn delete_named_and_unknown() {
        let mut registry = ContextRegistry::new();
        registry.add("a", 1, Parameters::new());
        registry.add("b", 1, Parameters::new());
        assert!(registry.delete(&["a", "missing"]));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.as_slice()[0].name, "b");
    }

    #[test]
    fn delete_empty_clears_everything() {
        let mut registry = ContextRegistry::new();
        registry.add("a", 1, Parameters::new());
        registry.add("b", 3, Parameters::new());
        assert!(registry.delete::<&str>(&[]));
        assert!(registry.is_empty());
    }

    #[test]
    fn update_touches_existing_only() {
        let mut registry = ContextRegistry::new();
        assert!(!registry.update("ghost", 2, Parameters::new()));
        assert!(registry.is_empty());

        registry.add("real", 1, params(json!({"x": 1})));
        assert!(registry.update("real", 0, params(json!({"y": 2}))));
        let context = registry.get("real").unwrap();
        assert_eq!(context.lifespan_count, 0);
        assert_eq!(context.parameters.len(), 2);
    }

    #[test]
    fn v1_lifespan_alias_is_accepted() {
        let context: Context =
            serde_json::from_value(json!({"name": "ctx", "lifespan": 4})).unwrap();
        assert_eq!(context.lifespan_count, 4);
        assert_eq!(
            serde_json::to_value(&context).unwrap(),
            json!({"name": "ctx", "lifespanCount": 4, "parameters": {}})
        );
    }
}
