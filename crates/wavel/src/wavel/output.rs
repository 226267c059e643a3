//! Normalized result wrapper returned from every pipeline call.

use serde::Serialize;
use serde_json::Value;

/// Decoded response from the session host.
///
/// Wraps the whole response body; [`Output::payload`] exposes the host's
/// `response` field, the convenience accessors interpret common payload
/// shapes. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    raw: Value,
}

impl Output {
    pub(crate) fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Entire decoded response body, status field included.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The host's `response` payload field.
    pub fn payload(&self) -> &Value {
        &self.raw["response"]
    }

    /// Whether the response-level status field reports success.
    pub fn is_success(&self) -> bool {
        self.raw["status"].as_str() == Some("success")
    }

    /// Payload as a boolean, when the operation returns one.
    pub fn as_bool(&self) -> Option<bool> {
        self.payload().as_bool()
    }

    /// Payload as a string. Operations like `isChatOnline` report states
    /// such as `PRIVATE` or `NO_CHAT` as plain strings here.
    pub fn as_str(&self) -> Option<&str> {
        self.payload().as_str()
    }

    /// Payload as a list, when the operation returns one.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        self.payload().as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_predicate() {
        let out = Output::new(json!({"status": "success", "response": true}));
        assert!(out.is_success());
        assert_eq!(out.as_bool(), Some(true));
    }

    #[test]
    fn test_payload_access() {
        let out = Output::new(json!({"status": "success", "response": {"foo": 1}}));
        assert_eq!(out.payload()["foo"], json!(1));
        assert!(out.as_bool().is_none());
    }

    #[test]
    fn test_list_payload() {
        let out = Output::new(json!({"status": "success", "response": ["1@c.us", "2@c.us"]}));
        assert_eq!(out.as_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_string_payload() {
        let out = Output::new(json!({"status": "success", "response": "NO_CHAT"}));
        assert_eq!(out.as_str(), Some("NO_CHAT"));
    }
}
