//! Single-use vCard builder.
//!
//! Accumulate a display name and a phone number, serialize once. The builder
//! locks after serialization so a stale or partially-built card can never be
//! reused silently.

use crate::wavel::error::{WavelError, WavelResult};
use crate::wavel::format;

/// Minimal vCard 3.0 builder for contact sends.
///
/// Exactly one name and one phone line; both are required before
/// [`VCard::serialize`]. Any mutation after serialization fails.
#[derive(Debug, Default)]
pub struct VCard {
    full_name: Option<String>,
    phone_digits: Option<String>,
    built: bool,
}

impl VCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact's display name. Fails on an empty name or a locked
    /// builder.
    pub fn add_name(&mut self, name: &str) -> WavelResult<()> {
        self.ensure_unlocked()?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(WavelError::vcard("Contact name is empty"));
        }
        self.full_name = Some(trimmed.to_string());
        Ok(())
    }

    /// Set the contact's phone number, normalized to digits only.
    pub fn add_phone_number(&mut self, number: impl ToString) -> WavelResult<()> {
        self.ensure_unlocked()?;
        let cleaned = format::digits(&number.to_string());
        if cleaned.is_empty() {
            return Err(WavelError::vcard("Phone number contains no digits"));
        }
        self.phone_digits = Some(cleaned);
        Ok(())
    }

    /// Serialize to a vCard 3.0 text block and lock the builder.
    pub fn serialize(&mut self) -> WavelResult<String> {
        self.ensure_unlocked()?;
        let name = self
            .full_name
            .as_ref()
            .ok_or_else(|| WavelError::vcard("Missing contact name"))?;
        let phone = self
            .phone_digits
            .as_ref()
            .ok_or_else(|| WavelError::vcard("Missing phone number"))?;

        self.built = true;
        Ok(format!(
            "BEGIN:VCARD\nVERSION:3.0\nFN:{}\nTEL;type=CELL;waid={}:+{}\nEND:VCARD",
            name, phone, phone
        ))
    }

    fn ensure_unlocked(&self) -> WavelResult<()> {
        if self.built {
            return Err(WavelError::vcard("VCard already serialized"));
        }
        Ok(())
    }
}
