//! Error bodies returned by the backend.
//!
//! The backend answers failures with `{"detail": ...}`. `detail` is a string
//! for errors raised by the handlers and a list of `{loc, msg, type}` objects
//! for request validation errors.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Human readable message carried by `detail`, if any
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Extracts the `detail` message from a raw response body
pub fn detail_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_verbatim() {
        assert_eq!(
            detail_message(r#"{"detail":"CNPJ já cadastrado"}"#),
            Some("CNPJ já cadastrado".to_string())
        );
    }

    #[test]
    fn test_validation_list_is_joined() {
        let body = r#"{"detail":[
            {"loc":["body","quantity"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","unit"],"msg":"str type expected","type":"type_error.str"}
        ]}"#;
        assert_eq!(
            detail_message(body),
            Some("field required; str type expected".to_string())
        );
    }

    #[test]
    fn test_no_detail() {
        assert_eq!(detail_message(r#"{"error":"x"}"#), None);
        assert_eq!(detail_message(r#"{"detail":""}"#), None);
        assert_eq!(detail_message(r#"{"detail":{"code":1}}"#), None);
        assert_eq!(detail_message("Internal Server Error"), None);
        assert_eq!(detail_message(""), None);
    }
}
