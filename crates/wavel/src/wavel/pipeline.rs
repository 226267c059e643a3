//! The shared request pipeline every domain operation funnels through.
//!
//! Config check, envelope construction, one transport exchange, response
//! decoding, and error classification live here and nowhere else. The
//! pipeline is stateless and re-entrant: concurrent callers each build their
//! own envelope and receive their own [`Output`].

use crate::wavel::error::{WavelError, WavelResult};
use crate::wavel::output::Output;
use crate::wavel::transport::Transport;
use crate::wavel::types::{RequestEnvelope, WavelConfig};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Normalize-dispatch-interpret mechanism shared by all operation sets.
#[derive(Clone)]
pub struct RequestPipeline {
    config: WavelConfig,
    transport: Arc<dyn Transport>,
}

impl RequestPipeline {
    pub fn new(config: WavelConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &WavelConfig {
        &self.config
    }

    /// Dispatch one operation and interpret the response.
    ///
    /// Exactly one outbound exchange per call; no retries, no caching. An
    /// empty configured host fails with `HostIsEmpty` before any I/O.
    pub async fn process(&self, operation: &str, params: Value) -> WavelResult<Output> {
        if self.config.base_url.trim().is_empty() {
            return Err(WavelError::host_is_empty());
        }

        let envelope = RequestEnvelope::new(operation, params);
        debug!("Dispatching {}", envelope.operation);

        let raw = self
            .transport
            .send(&envelope.operation, &envelope.body())
            .await?;

        let body: Value = serde_json::from_slice(&raw)
            .map_err(|_| WavelError::invalid_response("Response body is not valid JSON"))?;

        if Self::is_remote_failure(&body) {
            return Err(WavelError::from_remote(&body, None));
        }

        Ok(Output::new(body))
    }

    /// A populated error field or a non-success status marks a remote
    /// application-level failure.
    fn is_remote_failure(body: &Value) -> bool {
        if !body["error"].is_null() {
            return true;
        }
        match body["status"].as_str() {
            Some(status) => status != "success",
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::wavel::error::WavelErrorCode;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Spy transport recording every exchange and replaying a canned body.
    pub(crate) struct MockTransport {
        pub calls: Mutex<Vec<(String, Value)>>,
        pub response: Vec<u8>,
    }

    impl MockTransport {
        pub fn returning(body: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: serde_json::to_vec(&body).unwrap(),
            })
        }

        pub fn returning_bytes(bytes: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response: bytes.to_vec(),
            })
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn send(&self, endpoint_suffix: &str, payload: &Value) -> WavelResult<Vec<u8>> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint_suffix.to_string(), payload.clone()));
            Ok(self.response.clone())
        }
    }

    fn pipeline_with(transport: Arc<MockTransport>) -> RequestPipeline {
        RequestPipeline::new(WavelConfig::new("http://localhost:8002"), transport)
    }

    #[tokio::test]
    async fn test_empty_host_fails_before_any_io() {
        let spy = MockTransport::returning(json!({"status": "success", "response": true}));
        let pipeline = RequestPipeline::new(WavelConfig::new(""), spy.clone());

        let err = pipeline.process("getAllChats", json!({})).await.unwrap_err();
        assert_eq!(err.code, WavelErrorCode::HostIsEmpty);
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_payload_round_trips() {
        let spy = MockTransport::returning(json!({"status": "success", "response": {"foo": 1}}));
        let out = pipeline_with(spy).process("x", json!({})).await.unwrap();
        assert!(out.is_success());
        assert_eq!(out.payload(), &json!({"foo": 1}));
    }

    #[tokio::test]
    async fn test_remote_error_carries_message() {
        let spy = MockTransport::returning(json!({
            "status": "error",
            "response": {"message": "number not on whatsapp", "code": 422}
        }));
        let err = pipeline_with(spy).process("sendVCard", json!({})).await.unwrap_err();
        assert_eq!(err.code, WavelErrorCode::RemoteError);
        assert_eq!(err.message, "number not on whatsapp");
        assert_eq!(err.details.as_deref(), Some("code=422"));
    }

    #[tokio::test]
    async fn test_error_field_marks_failure() {
        let spy = MockTransport::returning(json!({"error": "session closed"}));
        let err = pipeline_with(spy).process("getContact", json!({})).await.unwrap_err();
        assert_eq!(err.code, WavelErrorCode::RemoteError);
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let spy = MockTransport::returning_bytes(b"<html>502 Bad Gateway</html>");
        let err = pipeline_with(spy).process("x", json!({})).await.unwrap_err();
        assert_eq!(err.code, WavelErrorCode::InvalidResponse);
    }

    #[tokio::test]
    async fn test_one_exchange_per_call() {
        let spy = MockTransport::returning(json!({"status": "success", "response": null}));
        let pipeline = pipeline_with(spy.clone());
        pipeline.process("clearAllChats", json!({})).await.unwrap();
        pipeline.process("cutChatCache", json!({})).await.unwrap();
        assert_eq!(spy.call_count(), 2);

        let calls = spy.calls.lock().unwrap();
        assert_eq!(calls[0].0, "clearAllChats");
        assert_eq!(calls[1].0, "cutChatCache");
    }
}
