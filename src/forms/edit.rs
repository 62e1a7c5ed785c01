//! Edit-mode contact form.

use super::{FormFields, SubmitOutcome};
use crate::client::ContactStore;
use crate::error::ApiResult;
use crate::models::{Contact, ContactDraft};
use crate::panel::ErrorPanel;
use crate::validation::{validate, Field};
use std::sync::Arc;
use std::time::Duration;

/// Controller for editing an existing contact.
///
/// Fields are prefilled from the stored record; the record id correlates the
/// draft with the contact being updated. After a successful submission the
/// fields keep their submitted values.
pub struct EditContactForm {
    contact_id: i64,
    fields: FormFields,
    panel: ErrorPanel,
    store: Arc<dyn ContactStore>,
}

impl EditContactForm {
    /// Create a form prefilled from an already-fetched record.
    pub fn new(store: Arc<dyn ContactStore>, contact: &Contact) -> Self {
        Self {
            contact_id: contact.id,
            fields: FormFields::from_draft(ContactDraft::from(contact)),
            panel: ErrorPanel::new(),
            store,
        }
    }

    /// Fetch the record and open a form for it.
    pub async fn load(store: Arc<dyn ContactStore>, contact_id: i64) -> ApiResult<Self> {
        let contact = store.get(contact_id).await?;
        Ok(Self::new(store, &contact))
    }

    /// Use a custom error-panel auto-dismiss delay.
    pub fn with_panel_timeout(mut self, display_for: Duration) -> Self {
        self.panel = ErrorPanel::with_timeout(display_for);
        self
    }

    /// Id of the contact being edited.
    pub fn contact_id(&self) -> i64 {
        self.contact_id
    }

    /// Record a keystroke: store the new value and optimistically clear the
    /// field's panel entry. No re-validation happens here.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.panel.clear_field(field);
    }

    /// Current value of a field.
    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// The error panel owned by this form.
    pub fn panel(&self) -> &ErrorPanel {
        &self.panel
    }

    /// Dismiss the error panel explicitly (close button).
    pub fn dismiss_errors(&mut self) {
        self.panel.dismiss();
    }

    /// Validate and, if valid, push the update.
    ///
    /// On success the fields stay as submitted and the caller should trigger
    /// a view refresh. A store failure is logged and otherwise swallowed.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = self.fields.to_draft();

        let report = validate(&draft);
        if !report.is_valid() {
            self.panel.show(report.into_errors());
            return SubmitOutcome::Invalid;
        }

        self.panel.dismiss();

        match self.store.update(self.contact_id, &draft).await {
            Ok(contact) => {
                tracing::info!(id = contact.id, "contact updated");
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!(id = self.contact_id, "failed to update contact: {}", e);
                SubmitOutcome::Failed
            }
        }
    }
}
