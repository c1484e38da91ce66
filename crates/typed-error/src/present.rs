//! Flat, serializable views of errors for API responses and logs.
//!
//! A typed error with a context presents the context itself:
//! `{"field": <key>, "message": <value>, "type": <tag>}`. Every other error
//! presents its full message: `{"message": <text>, "type": <tag>}`.

use std::error::Error as StdError;

use serde_json::{Map, Value};

use crate::chain::{as_typed, get_type};

pub fn to_map(err: &(dyn StdError + 'static)) -> Map<String, Value> {
    let mut map = Map::new();
    if let Some((typed, ctx)) = as_typed(err).and_then(|t| Some((t, t.context()?))) {
        map.insert("field".into(), ctx.key.to_json_value());
        map.insert("message".into(), ctx.value.to_json_value());
        map.insert("type".into(), Value::String(typed.kind().to_string()));
        return map;
    }
    map.insert("message".into(), Value::String(err.to_string()));
    map.insert("type".into(), Value::String(get_type(err).to_string()));
    map
}

/// Compact JSON of [`to_map`]. Empty when serialization fails.
pub fn to_json(err: &(dyn StdError + 'static)) -> Vec<u8> {
    serde_json::to_vec(&to_map(err)).unwrap_or_default()
}

/// Indented JSON of [`to_map`], for human consumption.
pub fn to_json_pretty(err: &(dyn StdError + 'static)) -> String {
    serde_json::to_string_pretty(&to_map(err)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorType, new, set_context, wrap};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn context_replaces_message_text() {
        let err = set_context(
            new("lookup failed", Some(ErrorType::NOT_FOUND)),
            "user_id",
            42,
        );
        assert_eq!(
            Value::Object(to_map(&err)),
            json!({"field": "user_id", "message": 42, "type": "NotFound"})
        );
    }

    #[test]
    fn without_context_uses_full_chain_text() {
        let err = wrap(new("a", None), "b", Some(ErrorType::DB_ERROR));
        let map = to_map(&err);
        assert!(!map.contains_key("field"));
        assert_eq!(
            Value::Object(map),
            json!({"message": "b: a", "type": "DBError"})
        );
    }

    #[test]
    fn native_errors_present_as_no_type() {
        let err = std::io::Error::other("socket closed");
        assert_eq!(
            String::from_utf8(to_json(&err)).unwrap(),
            r#"{"message":"socket closed","type":"NoType"}"#
        );
    }

    #[test]
    fn json_keys_are_sorted() {
        let err = set_context(new("m", Some(ErrorType::BAD_REQUEST)), "email", "required");
        assert_eq!(
            String::from_utf8(to_json(&err)).unwrap(),
            r#"{"field":"email","message":"required","type":"BadRequest"}"#
        );
    }

    #[test]
    fn pretty_json_is_indented() {
        let pretty = to_json_pretty(&new("boom", None));
        assert!(pretty.contains("\"message\": \"boom\""));
        assert!(pretty.contains("\"type\": \"NoType\""));
    }
}
