//! Identifier normalization and inline media encoding.
//!
//! Phone numbers and group ids arrive decorated (`+`, spaces, punctuation)
//! and leave as wire identifiers carrying the host's domain suffix. Local
//! files become self-describing `data:` URIs the host can decode.

use crate::wavel::error::{WavelError, WavelResult};
use base64::{engine::general_purpose, Engine as _};
use log::debug;
use serde::Serialize;
use std::fmt;

/// Domain suffix for individual chats.
pub const INDIVIDUAL_SUFFIX: &str = "@c.us";
/// Domain suffix for group chats.
pub const GROUP_SUFFIX: &str = "@g.us";

/// A normalized chat/contact wire address.
///
/// Always digits followed by exactly one domain suffix. Built fresh per call
/// from a raw identifier; never feed an already-normalized value back through
/// [`normalize_identifier`], the suffix would duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip every non-digit character from a raw identifier.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Turn a raw phone number or group id into a wire identifier.
///
/// Strips non-digit decoration and appends the group or individual domain
/// suffix. Fails with a `Format` error when nothing numeric remains.
pub fn normalize_identifier(raw: impl ToString, is_group: bool) -> WavelResult<Identifier> {
    let raw = raw.to_string();
    let cleaned = digits(&raw);
    if cleaned.is_empty() {
        return Err(WavelError::format(format!(
            "Identifier contains no digits: {:?}",
            raw
        )));
    }
    let suffix = if is_group {
        GROUP_SUFFIX
    } else {
        INDIVIDUAL_SUFFIX
    };
    Ok(Identifier(format!("{}{}", cleaned, suffix)))
}

// ─── Media encoding ─────────────────────────────────────────────────────

/// What a media payload is being sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Document,
    Image,
}

/// A file encoded for inline transfer: mime-tagged base64 `data:` URI plus
/// the original filename for caption/metadata fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub data: String,
    pub filename: String,
}

/// Read a local file and encode it as an inline `data:` URI.
///
/// The MIME type is guessed from the path. An `Image` payload must resolve
/// to an `image/*` type; a file with no guessable type fails with
/// `UnsupportedMedia`, an unreadable path with `FileNotFound`.
pub async fn encode_media(path: &str, kind: MediaKind) -> WavelResult<MediaPayload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|_| WavelError::file_not_found(path))?;

    let mime = mime_guess::from_path(path)
        .first_raw()
        .ok_or_else(|| {
            WavelError::unsupported_media(format!("Cannot determine MIME type for {}", path))
        })?;

    if kind == MediaKind::Image && !mime.starts_with("image/") {
        return Err(WavelError::unsupported_media(format!(
            "Expected an image, got {} for {}",
            mime, path
        )));
    }

    let filename = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string();

    let body = general_purpose::STANDARD.encode(&bytes);
    debug!("Encoded {} ({} bytes, {})", path, bytes.len(), mime);

    Ok(MediaPayload {
        data: format!("data:{};base64,{}", mime, body),
        filename,
    })
}
