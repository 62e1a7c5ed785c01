//! Contact models: the in-memory draft a form edits and the persisted record.

use serde::{Deserialize, Serialize};

/// An in-memory, not-yet-persisted set of contact field values held by a form.
///
/// All fields are plain strings; an empty string is the "absent" encoding for
/// the optional fields. Only `first_name` and `last_name` are required, and
/// that requirement is enforced by the validator rather than the type, so a
/// draft can always represent whatever the user has typed so far.
///
/// Serializes to the wire body the contact-storage API expects:
/// `{first_name, last_name, email, telephone, company, address, notes}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    /// First name (required, at least 2 characters)
    pub first_name: String,

    /// Last name (required, at least 2 characters)
    pub last_name: String,

    /// Email address (optional)
    pub email: String,

    /// Telephone number (optional)
    pub telephone: String,

    /// Company/organization (optional, unvalidated)
    pub company: String,

    /// Postal address (optional, unvalidated)
    pub address: String,

    /// Free-form notes (optional, at most 500 characters)
    pub notes: String,
}

impl ContactDraft {
    /// Full name for display purposes.
    pub fn display_name(&self) -> String {
        match (self.first_name.trim(), self.last_name.trim()) {
            ("", "") => String::new(),
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{} {}", first, last),
        }
    }
}

/// A contact as stored by the contact-storage service.
///
/// Identical to [`ContactDraft`] plus the server-assigned id. The id is owned
/// by the caller (the edit form holds it to correlate the draft with the
/// stored record); the validator never sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Server-assigned identifier
    pub id: i64,

    #[serde(flatten)]
    pub fields: ContactDraft,
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        contact.fields.clone()
    }
}
