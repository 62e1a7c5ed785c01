//! Create-mode contact form.

use super::{FormFields, SubmitOutcome};
use crate::client::ContactStore;
use crate::panel::ErrorPanel;
use crate::validation::{validate, Field};
use std::sync::Arc;
use std::time::Duration;

/// Controller for the "new contact" form.
///
/// Fields start empty and are cleared again after a successful submission.
/// `submit` takes `&mut self`, so a second submission on the same form cannot
/// start while one is awaiting the store.
pub struct CreateContactForm {
    fields: FormFields,
    panel: ErrorPanel,
    store: Arc<dyn ContactStore>,
}

impl CreateContactForm {
    /// Create a form with the default panel timeout.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self {
            fields: FormFields::empty(),
            panel: ErrorPanel::new(),
            store,
        }
    }

    /// Create a form with a custom error-panel auto-dismiss delay.
    pub fn with_panel_timeout(store: Arc<dyn ContactStore>, display_for: Duration) -> Self {
        Self {
            fields: FormFields::empty(),
            panel: ErrorPanel::with_timeout(display_for),
            store,
        }
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

    /// Validate and, if valid, persist the draft.
    ///
    /// On success all fields reset to empty and the caller should trigger a
    /// view refresh. A store failure is logged and otherwise swallowed: the
    /// draft stays as typed so the user can try again.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = self.fields.to_draft();

        let report = validate(&draft);
        if !report.is_valid() {
            self.panel.show(report.into_errors());
            return SubmitOutcome::Invalid;
        }

        self.panel.dismiss();

        match self.store.create(&draft).await {
            Ok(contact) => {
                tracing::info!(id = contact.id, "contact created");
                self.fields.reset();
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!("failed to create contact: {}", e);
                SubmitOutcome::Failed
            }
        }
    }
}
