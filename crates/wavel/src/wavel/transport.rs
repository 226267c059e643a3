//! Transport seam between the pipeline and the network.
//!
//! The pipeline talks to a [`Transport`] implementation, never to reqwest
//! directly; tests swap in a spy, production wires in [`HttpTransport`].

use crate::wavel::error::{WavelError, WavelResult};
use crate::wavel::types::WavelConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;

/// One request/response exchange with the session host.
///
/// `endpoint_suffix` is the operation name; `payload` the JSON parameter
/// map. Implementations own timeout and connection policy — the pipeline
/// performs exactly one `send` per call and never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, endpoint_suffix: &str, payload: &Value) -> WavelResult<Vec<u8>>;
}

/// reqwest-backed transport posting to `{base_url}/{operation}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: WavelConfig,
}

impl HttpTransport {
    pub fn new(config: &WavelConfig) -> WavelResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_sec as u64))
            .connect_timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| WavelError::network(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(ref key) = self.config.api_key {
            if let Ok(v) = HeaderValue::from_str(&format!("Bearer {}", key)) {
                headers.insert(AUTHORIZATION, v);
            }
        }
        headers
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), suffix)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, endpoint_suffix: &str, payload: &Value) -> WavelResult<Vec<u8>> {
        let url = self.url(endpoint_suffix);
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(payload)
            .send()
            .await
            .map_err(|e| WavelError::network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| WavelError::network(e.to_string()))?
            .to_vec();

        debug!("{} returned {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
