//! # wavel — WhatsApp session-host client
//!
//! Typed client for a remote WhatsApp-session automation host. Every domain
//! operation funnels through one request pipeline: identifier/media
//! normalization, payload construction, a single HTTP exchange, response
//! decoding, and error classification.
//!
//! ## Capabilities
//!
//! - **Contacts** – send vCards and existing contacts, block/unblock,
//!   blocked-id and contact lookup.
//! - **Media** – documents, images, stickers (converted or raw webp),
//!   host-fetched URL files, and media decryption.
//! - **Chats** – archive/unarchive, mute checks, presence and last-seen,
//!   chat/message retrieval, clearing and deletion, cache trimming.
//!
//! The transport is an injectable trait; tests run against a spy, production
//! uses the bundled reqwest transport. The pipeline never retries and keeps
//! no state between calls.

pub mod types;
pub mod error;
pub mod format;
pub mod vcard;
pub mod output;
pub mod transport;
pub mod pipeline;
pub mod contact;
pub mod media;
pub mod chat;
pub mod client;

// Re-exports
pub use chat::ChatOps;
pub use client::Wavel;
pub use contact::ContactOps;
pub use error::{WavelError, WavelErrorCode, WavelResult};
pub use format::{Identifier, MediaKind, MediaPayload};
pub use media::MediaOps;
pub use output::Output;
pub use pipeline::RequestPipeline;
pub use transport::{HttpTransport, Transport};
pub use types::{RequestEnvelope, WavelConfig};
pub use vcard::VCard;
