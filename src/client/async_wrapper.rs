//! Async seam over the synchronous ContactApiClient.
//!
//! Forms depend on the [`ContactStore`] trait rather than on the concrete
//! client, so tests can substitute a mock store. The production
//! implementation runs HTTP operations via `tokio::task::spawn_blocking`,
//! keeping the rest of the UI event loop responsive while a submission
//! is in flight.

use crate::client::ContactApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the contact-storage service.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a new contact.
    async fn create(&self, draft: &ContactDraft) -> ApiResult<Contact>;

    /// Update an existing contact.
    async fn update(&self, contact_id: i64, draft: &ContactDraft) -> ApiResult<Contact>;

    /// Fetch a single contact (edit-mode prefill).
    async fn get(&self, contact_id: i64) -> ApiResult<Contact>;

    /// Fetch all contacts.
    async fn list(&self) -> ApiResult<Vec<Contact>>;

    /// Delete a contact.
    async fn delete(&self, contact_id: i64) -> ApiResult<()>;
}

/// Production [`ContactStore`] backed by the synchronous HTTP client.
#[derive(Clone)]
pub struct ApiContactStore {
    client: Arc<ContactApiClient>,
}

impl ApiContactStore {
    pub fn new(client: ContactApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl ContactStore for ApiContactStore {
    async fn create(&self, draft: &ContactDraft) -> ApiResult<Contact> {
        let client = self.client.clone();
        let draft = draft.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&draft))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update(&self, contact_id: i64, draft: &ContactDraft) -> ApiResult<Contact> {
        let client = self.client.clone();
        let draft = draft.clone();

        tokio::task::spawn_blocking(move || client.update_contact(contact_id, &draft))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get(&self, contact_id: i64) -> ApiResult<Contact> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_contact(contact_id))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn list(&self) -> ApiResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_all_contacts())
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete(&self, contact_id: i64) -> ApiResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(contact_id))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
