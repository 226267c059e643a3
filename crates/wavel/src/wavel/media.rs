//! Media operations: documents, images, stickers, URL files, and
//! decryption of received media.
//!
//! Local files are inlined as base64 `data:` URIs via
//! [`format::encode_media`]; the host decodes them on its side.

use crate::wavel::error::WavelResult;
use crate::wavel::format::{self, MediaKind};
use crate::wavel::output::Output;
use crate::wavel::pipeline::RequestPipeline;
use serde_json::json;
use std::sync::Arc;

/// Media-related operations against the session host.
#[derive(Clone)]
pub struct MediaOps {
    pipeline: Arc<RequestPipeline>,
}

impl MediaOps {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Send a local file as a document with a caption.
    pub async fn document(
        &self,
        caption: &str,
        receiver_number: impl ToString,
        file: &str,
        is_group: bool,
    ) -> WavelResult<Output> {
        let payload = format::encode_media(file, MediaKind::Document).await?;
        self.pipeline
            .process(
                "sendFile",
                json!({
                    "to": format::normalize_identifier(receiver_number, is_group)?,
                    "file": payload.data,
                    "filename": payload.filename,
                    "caption": caption,
                }),
            )
            .await
    }

    /// Send a local image with a caption.
    pub async fn image(
        &self,
        caption: &str,
        receiver_number: impl ToString,
        file: &str,
        is_group: bool,
    ) -> WavelResult<Output> {
        let payload = format::encode_media(file, MediaKind::Image).await?;
        self.pipeline
            .process(
                "sendImage",
                json!({
                    "to": format::normalize_identifier(receiver_number, is_group)?,
                    "file": payload.data,
                    "filename": payload.filename,
                    "caption": caption,
                }),
            )
            .await
    }

    /// Send a local image converted to a sticker by the host.
    pub async fn image_as_sticker(
        &self,
        file: &str,
        receiver_number: impl ToString,
        is_group: bool,
    ) -> WavelResult<Output> {
        let payload = format::encode_media(file, MediaKind::Image).await?;
        self.pipeline
            .process(
                "sendImageAsSticker",
                json!({
                    "to": format::normalize_identifier(receiver_number, is_group)?,
                    "image": payload.data,
                }),
            )
            .await
    }

    /// Send a pre-rendered webp file as a sticker, bypassing host-side
    /// conversion.
    pub async fn raw_webp_as_sticker(
        &self,
        file: &str,
        receiver_number: impl ToString,
        is_group: bool,
    ) -> WavelResult<Output> {
        let payload = format::encode_media(file, MediaKind::Document).await?;
        self.pipeline
            .process(
                "sendRawWebpAsSticker",
                json!({
                    "to": format::normalize_identifier(receiver_number, is_group)?,
                    "webpBase64": payload.data,
                }),
            )
            .await
    }

    /// Have the host fetch a file by URL and send it. The filename is the
    /// last path segment of the URL.
    pub async fn file_from_url(
        &self,
        url: &str,
        receiver_number: impl ToString,
        caption: &str,
        is_group: bool,
    ) -> WavelResult<Output> {
        let filename = url.rsplit('/').next().unwrap_or(url);
        self.pipeline
            .process(
                "sendFileFromUrl",
                json!({
                    "to": format::normalize_identifier(receiver_number, is_group)?,
                    "url": url,
                    "filename": filename,
                    "caption": caption,
                }),
            )
            .await
    }

    /// Decrypt the media attached to a received message id.
    pub async fn decrypt_media(&self, message_id: &str) -> WavelResult<Output> {
        self.pipeline
            .process("decryptMedia", json!({ "message": message_id }))
            .await
    }
}
