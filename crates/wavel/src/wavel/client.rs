//! Top-level client wiring configuration, transport, and operation sets.

use crate::wavel::chat::ChatOps;
use crate::wavel::contact::ContactOps;
use crate::wavel::error::WavelResult;
use crate::wavel::media::MediaOps;
use crate::wavel::pipeline::RequestPipeline;
use crate::wavel::transport::{HttpTransport, Transport};
use crate::wavel::types::WavelConfig;
use std::sync::Arc;

/// Client for a WhatsApp-session automation host.
///
/// Holds one shared [`RequestPipeline`]; the operation-set accessors are
/// cheap clones over it. The client is `Clone` and safe to share across
/// tasks, each call is an independent exchange.
#[derive(Clone)]
pub struct Wavel {
    pipeline: Arc<RequestPipeline>,
}

impl Wavel {
    /// Build a client with the default HTTP transport.
    pub fn new(config: WavelConfig) -> WavelResult<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(config: WavelConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            pipeline: Arc::new(RequestPipeline::new(config, transport)),
        }
    }

    /// Contact sending, blocking, and lookup.
    pub fn contact(&self) -> ContactOps {
        ContactOps::new(self.pipeline.clone())
    }

    /// Documents, images, stickers, and URL files.
    pub fn media(&self) -> MediaOps {
        MediaOps::new(self.pipeline.clone())
    }

    /// Chat archive/mute/clear/presence utilities.
    pub fn chat(&self) -> ChatOps {
        ChatOps::new(self.pipeline.clone())
    }

    /// Shared pipeline, for calling operations not covered by the typed
    /// sets.
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavel::pipeline::tests::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_operation_sets_share_one_pipeline() {
        let spy = MockTransport::returning(json!({"status": "success", "response": true}));
        let client =
            Wavel::with_transport(WavelConfig::new("http://localhost:8002"), spy.clone());

        client.chat().get_all_chat_ids().await.unwrap();
        client.contact().get_all_contacts().await.unwrap();
        assert_eq!(spy.call_count(), 2);
    }

    #[tokio::test]
    async fn test_raw_pipeline_escape_hatch() {
        let spy = MockTransport::returning(json!({"status": "success", "response": {"ok": 1}}));
        let client = Wavel::with_transport(WavelConfig::new("http://localhost:8002"), spy);

        let out = client
            .pipeline()
            .process("getHostNumber", json!({}))
            .await
            .unwrap();
        assert_eq!(out.payload()["ok"], json!(1));
    }
}
