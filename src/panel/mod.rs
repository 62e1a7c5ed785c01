//! Transient error-display controller.
//!
//! [`ErrorPanel`] owns the "current validation errors" shown to the user and
//! the auto-dismiss timer that clears them after a fixed delay. The timer is
//! a scoped resource: it is cancelled whenever a newer state supersedes it
//! (fresh `show`, explicit `dismiss`) and on drop, so it can never fire
//! against a panel that no longer exists.

use crate::config::DEFAULT_ERROR_DISPLAY_SECS;
use crate::validation::{Field, ValidationErrors};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Shared state between the panel and its pending timer task.
#[derive(Debug, Default)]
struct PanelState {
    errors: ValidationErrors,
    /// Bumped on every show/dismiss so a timer that lost the race to its own
    /// abort still refuses to clear state it did not schedule.
    epoch: u64,
}

/// Owns the currently displayed validation errors and their lifetime.
///
/// The hosting form holds the panel exclusively. `show` replaces the error
/// set and (re)arms the auto-dismiss timer; `dismiss` clears both;
/// `clear_field` removes a single entry without touching the timer (the
/// optimistic clear on keystroke). Rendering is gated on [`is_visible`]:
/// an empty error set is never displayed.
///
/// [`is_visible`]: ErrorPanel::is_visible
#[derive(Debug)]
pub struct ErrorPanel {
    state: Arc<Mutex<PanelState>>,
    display_for: Duration,
    timer: Option<JoinHandle<()>>,
}

impl ErrorPanel {
    /// Create a panel with the default 5-second auto-dismiss delay.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_ERROR_DISPLAY_SECS))
    }

    /// Create a panel with a custom auto-dismiss delay.
    pub fn with_timeout(display_for: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(PanelState::default())),
            display_for,
            timer: None,
        }
    }

    /// Replace the displayed errors and restart the auto-dismiss timer.
    ///
    /// Must be called from within a tokio runtime (the timer is a spawned
    /// task).
    pub fn show(&mut self, errors: ValidationErrors) {
        self.cancel_timer();

        let epoch = {
            let mut state = match self.state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            state.errors = errors;
            state.epoch += 1;
            state.epoch
        };

        let state = Arc::clone(&self.state);
        let delay = self.display_for;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = match state.lock() {
                Ok(state) => state,
                Err(_) => return,
            };
            if state.epoch == epoch {
                state.errors = ValidationErrors::new();
                tracing::debug!("error panel auto-dismissed");
            }
        }));
    }

    /// Clear the displayed errors and cancel any pending timer.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        if let Ok(mut state) = self.state.lock() {
            state.errors = ValidationErrors::new();
            state.epoch += 1;
        }
    }

    /// Remove one field's entry if present; a no-op otherwise.
    ///
    /// The timer keeps running: clearing the last entry this way hides the
    /// panel but does not reset the dismiss schedule.
    pub fn clear_field(&mut self, field: Field) {
        if let Ok(mut state) = self.state.lock() {
            state.errors.remove(field);
        }
    }

    /// Snapshot of the currently displayed errors.
    pub fn current(&self) -> ValidationErrors {
        self.state
            .lock()
            .map(|state| state.errors.clone())
            .unwrap_or_default()
    }

    /// True when there is something to render. Empty panels are suppressed.
    pub fn is_visible(&self) -> bool {
        !self.current().is_empty()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for ErrorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ErrorPanel {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
