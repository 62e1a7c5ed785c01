//! Contact-form controllers.
//!
//! A form owns per-field draft state and an [`ErrorPanel`]. Submitting runs
//! the validator; invalid drafts show the panel and never reach the network,
//! valid drafts are handed to the [`ContactStore`]. Editing a field
//! optimistically clears that field's panel entry without re-validating.
//!
//! [`ErrorPanel`]: crate::panel::ErrorPanel
//! [`ContactStore`]: crate::client::ContactStore

mod create;
mod edit;

pub use create::CreateContactForm;
pub use edit::EditContactForm;

use crate::models::ContactDraft;
use crate::validation::Field;

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the error panel was shown and no request was made.
    Invalid,

    /// The store accepted the draft. The hosting view should refresh.
    Saved,

    /// Transport failure or non-success status. The attempt is abandoned:
    /// logged to the diagnostic channel, nothing shown to the user, no retry.
    Failed,
}

/// Field-indexed draft state backing a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    draft: ContactDraft,
}

impl FormFields {
    /// All fields empty (create mode).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prefilled from an existing draft (edit mode).
    pub fn from_draft(draft: ContactDraft) -> Self {
        Self { draft }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.draft.first_name,
            Field::LastName => &self.draft.last_name,
            Field::Email => &self.draft.email,
            Field::Telephone => &self.draft.telephone,
            Field::Company => &self.draft.company,
            Field::Address => &self.draft.address,
            Field::Notes => &self.draft.notes,
        }
    }

    /// Overwrite a field with the latest keystroke state.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.draft.first_name = value,
            Field::LastName => self.draft.last_name = value,
            Field::Email => self.draft.email = value,
            Field::Telephone => self.draft.telephone = value,
            Field::Company => self.draft.company = value,
            Field::Address => self.draft.address = value,
            Field::Notes => self.draft.notes = value,
        }
    }

    /// Assemble the draft for a submission attempt.
    pub fn to_draft(&self) -> ContactDraft {
        self.draft.clone()
    }

    /// Reset all fields to empty.
    pub fn reset(&mut self) {
        self.draft = ContactDraft::default();
    }
}
