//! contact-forms - Client-side core for a small contact manager.
//!
//! This library provides the one non-trivial piece of a thin CRUD form over a
//! REST contact store: pure draft validation, a transient error panel with a
//! cancellable auto-dismiss timer, and create/edit form controllers that
//! short-circuit submission on invalid input.
//!
//! # Architecture
//!
//! - **models**: Contact draft and persisted-record data structures
//! - **validation**: Pure validator mapping a draft to field-indexed errors
//! - **panel**: Error-display controller owning the auto-dismiss lifecycle
//! - **forms**: Create/edit form controllers and the submit algorithm
//! - **client**: HTTP client for the external contact-storage API
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Counters for API traffic

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod metrics;
pub mod models;
pub mod panel;
pub mod validation;

pub use client::{ApiContactStore, ContactApiClient, ContactStore};
pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError, ConfigResult};
pub use forms::{CreateContactForm, EditContactForm, FormFields, SubmitOutcome};
pub use metrics::Metrics;
pub use models::{Contact, ContactDraft};
pub use panel::ErrorPanel;
pub use validation::{validate, Field, ValidationErrors, ValidationReport};
