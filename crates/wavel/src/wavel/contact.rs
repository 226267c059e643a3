//! Contact operations: vCard/contact sending, blocking, and lookup.

use crate::wavel::error::WavelResult;
use crate::wavel::format;
use crate::wavel::output::Output;
use crate::wavel::pipeline::RequestPipeline;
use crate::wavel::vcard::VCard;
use serde_json::json;
use std::sync::Arc;

/// Contact-related operations against the session host.
#[derive(Clone)]
pub struct ContactOps {
    pipeline: Arc<RequestPipeline>,
}

impl ContactOps {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Send a contact card built from a display name and phone number.
    pub async fn send_vcard(
        &self,
        full_name: &str,
        phone_number: impl ToString,
        receiver_number: impl ToString,
        is_group: bool,
    ) -> WavelResult<Output> {
        let phone_number = phone_number.to_string();
        let mut vcard = VCard::new();
        vcard.add_name(full_name)?;
        vcard.add_phone_number(&phone_number)?;

        self.pipeline
            .process(
                "sendVCard",
                json!({
                    "chatId": format::normalize_identifier(receiver_number, is_group)?,
                    "vcard": vcard.serialize()?,
                    "contactName": full_name,
                    "contactNumber": phone_number,
                }),
            )
            .await
    }

    /// Forward an existing contact by its number.
    pub async fn send_contact(
        &self,
        contact_number: impl ToString,
        receiver_number: impl ToString,
    ) -> WavelResult<Output> {
        self.pipeline
            .process(
                "sendContact",
                json!({
                    "to": format::normalize_identifier(receiver_number, false)?,
                    "contactId": format::normalize_identifier(contact_number, false)?,
                }),
            )
            .await
    }

    pub async fn block(&self, contact_number: impl ToString) -> WavelResult<Output> {
        self.pipeline
            .process(
                "contactBlock",
                json!({ "id": format::normalize_identifier(contact_number, false)? }),
            )
            .await
    }

    pub async fn unblock(&self, contact_number: impl ToString) -> WavelResult<Output> {
        self.pipeline
            .process(
                "contactUnblock",
                json!({ "id": format::normalize_identifier(contact_number, false)? }),
            )
            .await
    }

    /// Ids of all blocked contacts.
    pub async fn get_blocked_ids(&self) -> WavelResult<Output> {
        self.pipeline.process("getBlockedIds", json!({})).await
    }

    /// Every contact known to the host session.
    pub async fn get_all_contacts(&self) -> WavelResult<Output> {
        self.pipeline.process("getAllContacts", json!({})).await
    }

    pub async fn get_contact(&self, contact_id: impl ToString) -> WavelResult<Output> {
        self.pipeline
            .process(
                "getContact",
                json!({ "contactId": format::normalize_identifier(contact_id, false)? }),
            )
            .await
    }
}
