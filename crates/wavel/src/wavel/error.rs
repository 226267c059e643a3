//! Crate-level error types for the Wavel client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alias for `Result<T, WavelError>`.
pub type WavelResult<T> = Result<T, WavelError>;

/// Uniform error type used across the Wavel crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WavelError {
    pub code: WavelErrorCode,
    pub message: String,
    /// Optional detail from the remote host or underlying failure.
    pub details: Option<String>,
    /// HTTP status code if originated from the remote exchange.
    pub http_status: Option<u16>,
}

impl fmt::Display for WavelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref d) = self.details {
            write!(f, " ({})", d)?;
        }
        Ok(())
    }
}

impl std::error::Error for WavelError {}

/// Categorised error codes.
///
/// Everything except `RemoteError`, `Network` and `InvalidResponse` is a
/// local failure detected before any request leaves the process; only the
/// remote-facing codes are reasonable candidates for a caller-side retry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WavelErrorCode {
    // ── Configuration ────────────────────────────────────
    HostIsEmpty,
    // ── Local validation ─────────────────────────────────
    Format,
    VCard,
    FileNotFound,
    UnsupportedMedia,
    // ── Remote exchange ──────────────────────────────────
    RemoteError,
    Network,
    InvalidResponse,
}

impl WavelError {
    /// No endpoint configured; raised before any I/O is attempted.
    pub fn host_is_empty() -> Self {
        Self {
            code: WavelErrorCode::HostIsEmpty,
            message: "No host endpoint configured".to_string(),
            details: None,
            http_status: None,
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self {
            code: WavelErrorCode::Format,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    pub fn vcard(msg: impl Into<String>) -> Self {
        Self {
            code: WavelErrorCode::VCard,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    pub fn file_not_found(path: &str) -> Self {
        Self {
            code: WavelErrorCode::FileNotFound,
            message: format!("File not found or unreadable: {}", path),
            details: None,
            http_status: None,
        }
    }

    pub fn unsupported_media(msg: impl Into<String>) -> Self {
        Self {
            code: WavelErrorCode::UnsupportedMedia,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            code: WavelErrorCode::Network,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self {
            code: WavelErrorCode::InvalidResponse,
            message: msg.into(),
            details: None,
            http_status: None,
        }
    }

    /// Build from an error-status response body reported by the remote host.
    ///
    /// The host reports failures as
    /// `{ "status": "error", "response": { "message": "...", "code": N } }`;
    /// message and code are carried through unchanged.
    pub fn from_remote(body: &serde_json::Value, http_status: Option<u16>) -> Self {
        let resp = &body["response"];
        let message = resp["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("Remote host reported an error")
            .to_string();
        let details = resp["code"]
            .as_i64()
            .map(|c| format!("code={}", c))
            .or_else(|| resp["code"].as_str().map(|c| format!("code={}", c)));
        Self {
            code: WavelErrorCode::RemoteError,
            message,
            details,
            http_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = WavelError::host_is_empty();
        assert!(err.to_string().contains("HostIsEmpty"));
        assert!(err.to_string().contains("No host endpoint"));
    }

    #[test]
    fn test_from_remote_carries_message_and_code() {
        let body = json!({
            "status": "error",
            "response": { "message": "chat not found", "code": 404 }
        });
        let err = WavelError::from_remote(&body, Some(200));
        assert_eq!(err.code, WavelErrorCode::RemoteError);
        assert_eq!(err.message, "chat not found");
        assert_eq!(err.details.as_deref(), Some("code=404"));
        assert_eq!(err.http_status, Some(200));
    }

    #[test]
    fn test_from_remote_without_structured_body() {
        let body = json!({ "status": "error" });
        let err = WavelError::from_remote(&body, None);
        assert_eq!(err.code, WavelErrorCode::RemoteError);
        assert!(err.message.contains("Remote host"));
        assert!(err.details.is_none());
    }

    #[test]
    fn test_local_codes() {
        assert_eq!(WavelError::format("x").code, WavelErrorCode::Format);
        assert_eq!(WavelError::vcard("x").code, WavelErrorCode::VCard);
        assert_eq!(
            WavelError::file_not_found("/nope").code,
            WavelErrorCode::FileNotFound
        );
    }
}
