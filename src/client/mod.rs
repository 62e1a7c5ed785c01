//! HTTP client for the external contact-storage API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles request
//! construction, error mapping, and response decoding for the storage service.

mod async_wrapper;
pub use async_wrapper::{ApiContactStore, ContactStore};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::metrics::Metrics;
use crate::models::{Contact, ContactDraft};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the contact-storage service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactApiClient {
    /// Base URL for the storage API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactApiClient {
    /// Create a new ContactApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ContactApiClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> Result<ureq::Response, ApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .get(&url)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a request with a JSON body (POST or PATCH).
    fn send_json(
        &self,
        method: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ureq::Response, ApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("{} {}", method, url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .request(method, &url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
            }
            Err(e) => {
                tracing::error!("{} {} - Error: {:?}", method, url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a DELETE request.
    fn delete(&self, path: &str) -> Result<ureq::Response, ApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .delete(&url)
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to an ApiError.
    fn map_error(&self, error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => ApiError::NotFound(message),
                    // 400: duplicate contact; 422: server-side validation
                    400 | 422 => ApiError::InvalidRequest(message),
                    _ => ApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ApiError::Timeout
                } else {
                    ApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Decode a response body into a Contact.
    fn decode_contact(response: ureq::Response) -> ApiResult<Contact> {
        let body = response
            .into_string()
            .map_err(|e| ApiError::HttpError(e.to_string()))?;
        serde_json::from_str::<Contact>(&body).map_err(ApiError::JsonError)
    }

    // ========================= Contact Operations =========================

    /// Create a new contact. The service replies 201 with the stored record.
    pub fn create_contact(&self, draft: &ContactDraft) -> ApiResult<Contact> {
        let body = serde_json::to_value(draft).map_err(ApiError::JsonError)?;

        let response = self.send_json("POST", "/create-contact", &body)?;
        if response.status() != 201 {
            return Err(ApiError::ApiError {
                status: response.status(),
                message: "Expected 201 Created".to_string(),
            });
        }

        let contact = Self::decode_contact(response)?;
        self.metrics.record_contact_created();
        Ok(contact)
    }

    /// Update an existing contact. The service replies 200 with the updated record.
    pub fn update_contact(&self, contact_id: i64, draft: &ContactDraft) -> ApiResult<Contact> {
        let body = serde_json::to_value(draft).map_err(ApiError::JsonError)?;

        let path = format!("/update-contact/{}", contact_id);
        let response = self.send_json("PATCH", &path, &body)?;
        if response.status() != 200 {
            return Err(ApiError::ApiError {
                status: response.status(),
                message: "Expected 200 OK".to_string(),
            });
        }

        let contact = Self::decode_contact(response)?;
        self.metrics.record_contact_updated();
        Ok(contact)
    }

    /// Get a single contact by ID.
    pub fn get_contact(&self, contact_id: i64) -> ApiResult<Contact> {
        let path = format!("/get-contact/{}", contact_id);
        let response = self.get(&path)?;
        Self::decode_contact(response)
    }

    /// Get all contacts.
    pub fn get_all_contacts(&self) -> ApiResult<Vec<Contact>> {
        let response = self.get("/all-contacts")?;
        let body = response
            .into_string()
            .map_err(|e| ApiError::HttpError(e.to_string()))?;
        serde_json::from_str::<Vec<Contact>>(&body).map_err(ApiError::JsonError)
    }

    /// Delete a contact.
    pub fn delete_contact(&self, contact_id: i64) -> ApiResult<()> {
        let path = format!("/delete-contact/{}", contact_id);
        self.delete(&path)?;
        Ok(())
    }
}
