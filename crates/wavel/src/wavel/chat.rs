//! Chat state utilities: archive, mute, clear, delete, presence, and
//! message retrieval.

use crate::wavel::error::WavelResult;
use crate::wavel::format;
use crate::wavel::output::Output;
use crate::wavel::pipeline::RequestPipeline;
use serde_json::json;
use std::sync::Arc;

/// Chat-related operations against the session host.
#[derive(Clone)]
pub struct ChatOps {
    pipeline: Arc<RequestPipeline>,
}

impl ChatOps {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Chats with numbers that are not saved contacts.
    pub async fn get_chats_with_non_contacts(&self) -> WavelResult<Output> {
        self.pipeline
            .process("getChatWithNonContacts", json!({}))
            .await
    }

    /// Archive or unarchive a chat.
    pub async fn archive(
        &self,
        chat_id: impl ToString,
        archive: bool,
        is_group: bool,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "archiveChat",
                json!({
                    "chatId": format::normalize_identifier(chat_id, is_group)?,
                    "archive": archive,
                }),
            )
            .await
    }

    /// Unarchive a chat; same exchange as [`ChatOps::archive`] with the
    /// flag flipped.
    pub async fn unarchive(&self, chat_id: impl ToString, is_group: bool) -> WavelResult<Output> {
        self.archive(chat_id, false, is_group).await
    }

    pub async fn is_muted(&self, chat_id: impl ToString, is_group: bool) -> WavelResult<Output> {
        self.pipeline
            .process(
                "isChatMuted",
                json!({ "chatId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }

    pub async fn get_all_chats(&self, with_new_message_only: bool) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getAllChats",
                json!({ "withNewMessageOnly": with_new_message_only }),
            )
            .await
    }

    pub async fn get_all_chat_ids(&self) -> WavelResult<Output> {
        self.pipeline.process("getAllChatIds", json!({})).await
    }

    pub async fn get_all_chats_with_messages(
        &self,
        with_new_message_only: bool,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getAllChatsWithMessages",
                json!({ "withNewMessageOnly": with_new_message_only }),
            )
            .await
    }

    /// Chat object for a contact id. The host expects the key `contactId`
    /// here, unlike the other chat operations.
    pub async fn get_chat_by_id(
        &self,
        chat_id: impl ToString,
        is_group: bool,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getChatById",
                json!({ "contactId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }

    /// Presence for a chat. The payload is a plain string: a boolean-like
    /// online/offline value, `PRIVATE` when the contact's privacy settings
    /// hide their status, or `NO_CHAT` when no chat exists.
    pub async fn is_online(&self, chat_id: impl ToString, is_group: bool) -> WavelResult<Output> {
        self.pipeline
            .process(
                "isChatOnline",
                json!({ "chatId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }

    /// Delete the conversation from the host session.
    pub async fn delete_chat(&self, chat_id: impl ToString, is_group: bool) -> WavelResult<Output> {
        self.pipeline
            .process(
                "deleteChat",
                json!({ "chatId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }

    /// Remove every message from a chat without deleting the chat itself.
    pub async fn clear_chat(&self, chat_id: impl ToString, is_group: bool) -> WavelResult<Output> {
        self.pipeline
            .process(
                "clearChat",
                json!({ "chatId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }

    /// Messages currently loaded for a chat in the host's web instance.
    /// This does not page through full history.
    pub async fn get_all_messages(
        &self,
        chat_id: impl ToString,
        is_group: bool,
        include_me: bool,
        include_notifications: bool,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getAllMessagesInChat",
                json!({
                    "chatId": format::normalize_identifier(chat_id, is_group)?,
                    "includeMe": include_me,
                    "includeNotifications": include_notifications,
                }),
            )
            .await
    }

    /// Clear every chat of all messages. Destructive on the host device.
    pub async fn clear_all_chats(&self) -> WavelResult<Output> {
        self.pipeline.process("clearAllChats", json!({})).await
    }

    /// Halve the host session's message cache.
    pub async fn cut_chat_cache(&self) -> WavelResult<Output> {
        self.pipeline.process("cutChatCache", json!({})).await
    }

    /// Epoch timestamp of the contact's last seen.
    pub async fn get_last_seen(
        &self,
        chat_id: impl ToString,
        is_group: bool,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getLastSeen",
                json!({ "chatId": format::normalize_identifier(chat_id, is_group)? }),
            )
            .await
    }
}
