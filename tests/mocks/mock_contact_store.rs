use async_trait::async_trait;
use contact_forms::error::{ApiError, ApiResult};
use contact_forms::models::{Contact, ContactDraft};
use contact_forms::ContactStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing form flows.
///
/// Provides an in-memory implementation of ContactStore that can be
/// seeded with records, switched into a failing mode, and tracks method
/// calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    contacts: Arc<Mutex<HashMap<i64, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<AtomicI64>,
    fail: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Seed the store with a record.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        self.next_id.fetch_max(contact.id + 1, Ordering::SeqCst);
        contacts.insert(contact.id, contact);
    }

    /// Make every subsequent call fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Fetch a stored record directly (bypassing the trait).
    pub fn stored(&self, id: i64) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failing(&self) -> ApiResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::HttpError("Connection failed".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn create(&self, draft: &ContactDraft) -> ApiResult<Contact> {
        self.track_call("create");
        self.check_failing()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let contact = Contact {
            id,
            fields: draft.clone(),
        };
        self.contacts.lock().unwrap().insert(id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, contact_id: i64, draft: &ContactDraft) -> ApiResult<Contact> {
        self.track_call("update");
        self.check_failing()?;

        let mut contacts = self.contacts.lock().unwrap();
        let contact = contacts
            .get_mut(&contact_id)
            .ok_or_else(|| ApiError::NotFound(format!("Contact {} not found", contact_id)))?;
        contact.fields = draft.clone();
        Ok(contact.clone())
    }

    async fn get(&self, contact_id: i64) -> ApiResult<Contact> {
        self.track_call("get");
        self.check_failing()?;

        let contacts = self.contacts.lock().unwrap();
        contacts
            .get(&contact_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Contact {} not found", contact_id)))
    }

    async fn list(&self) -> ApiResult<Vec<Contact>> {
        self.track_call("list");
        self.check_failing()?;

        let contacts = self.contacts.lock().unwrap();
        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn delete(&self, contact_id: i64) -> ApiResult<()> {
        self.track_call("delete");
        self.check_failing()?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&contact_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("Contact {} not found", contact_id)))
    }
}
