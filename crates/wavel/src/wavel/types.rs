//! Shared types for the Wavel client.
//!
//! Models cover host configuration and the per-call request envelope handed
//! to the transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Configuration ──────────────────────────────────────────────────────

/// Configuration for connecting to the session host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavelConfig {
    /// Base URL of the session host (e.g. `http://localhost:8002`).
    pub base_url: String,
    /// Optional API key, sent as a Bearer authorization header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Timeout in seconds applied per request by the HTTP transport.
    #[serde(default = "default_timeout")]
    pub timeout_sec: u32,
}

fn default_timeout() -> u32 {
    30
}

impl WavelConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_sec: default_timeout(),
        }
    }
}

// ─── Request envelope ───────────────────────────────────────────────────

/// One outbound call: operation name plus its parameter map.
///
/// Built fresh per call and consumed by the pipeline; the operation rides in
/// the URL suffix and the parameters become the JSON request body. Parameter
/// values are already primitive by the time they reach the envelope (media
/// payloads and vCards are serialized by the operation sets).
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    pub operation: String,
    pub params: Map<String, Value>,
}

impl RequestEnvelope {
    pub fn new(operation: &str, params: Value) -> Self {
        let params = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Self {
            operation: operation.to_string(),
            params,
        }
    }

    /// JSON request body for the transport.
    pub fn body(&self) -> Value {
        Value::Object(self.params.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_from_object() {
        let env = RequestEnvelope::new("archiveChat", json!({"chatId": "1@c.us", "archive": true}));
        assert_eq!(env.operation, "archiveChat");
        assert_eq!(env.body()["archive"], json!(true));
    }

    #[test]
    fn test_envelope_from_null_is_empty_body() {
        let env = RequestEnvelope::new("getAllContacts", Value::Null);
        assert_eq!(env.body(), json!({}));
    }

    #[test]
    fn test_config_defaults() {
        let cfg: WavelConfig = serde_json::from_str(r#"{"baseUrl":"http://h"}"#).unwrap();
        assert_eq!(cfg.base_url, "http://h");
        assert_eq!(cfg.timeout_sec, 30);
        assert!(cfg.api_key.is_none());
    }
}
