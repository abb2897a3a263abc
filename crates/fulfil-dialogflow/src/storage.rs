// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoding and encoding of the assistant's `userStorage` blob.
//!
//! The assistant hands the blob back exactly as it was last sent: a JSON
//! object serialized into a string. Anything that is not a JSON object is
//! rejected.

use fulfil_core::{FulfilError, Parameters};
use serde_json::Value;

/// Decode a `userStorage` field.
///
/// Absent, `null` and empty-string values decode to an empty map. A string
/// must contain a JSON object; an inline object is accepted as is.
pub fn parse_user_storage(raw: Option<&Value>) -> Result<Parameters, FulfilError> {
    match raw {
        None | Some(Value::Null) => Ok(Parameters::new()),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(Parameters::new()),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(FulfilError::malformed(format!(
                "userStorage must encode a JSON object, found {}",
                json_type(&other)
            ))),
            Err(err) => Err(FulfilError::malformed(format!(
                "userStorage is not valid JSON: {err}"
            ))),
        },
        Some(other) => Err(FulfilError::malformed(format!(
            "userStorage must be a string, found {}",
            json_type(other)
        ))),
    }
}

/// Encode a storage map into the opaque string sent back to the assistant.
pub fn encode_user_storage(storage: &Parameters) -> String {
    Value::Object(storage.clone()).to_string()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_values_decode_to_empty_map() {
        assert!(parse_user_storage(None).unwrap().is_empty());
        assert!(parse_user_storage(Some(&Value::Null)).unwrap().is_empty());
        assert!(parse_user_storage(Some(&json!(""))).unwrap().is_empty());
    }

    #[test]
    fn object_string_decodes_with_nulls_kept() {
        let storage = parse_user_storage(Some(&json!(r#"{"name":"Ada","pet":null}"#))).unwrap();
        assert_eq!(storage["name"], json!("Ada"));
        assert_eq!(storage["pet"], Value::Null);
    }

    #[test]
    fn non_object_payloads_are_malformed() {
        for raw in [json!("[1,2]"), json!("{'single': 'quotes'}"), json!(42)] {
            let err = parse_user_storage(Some(&raw)).unwrap_err();
            assert!(
                matches!(err, FulfilError::MalformedInput(_)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn encode_then_parse_is_identity() {
        let mut storage = Parameters::new();
        storage.insert("visits".into(), json!(3));
        let encoded = encode_user_storage(&storage);
        assert_eq!(encoded, r#"{"visits":3}"#);
        assert_eq!(parse_user_storage(Some(&json!(encoded))).unwrap(), storage);
    }
}
