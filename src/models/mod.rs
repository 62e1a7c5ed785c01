//! Data structures for contact drafts and persisted contacts.

mod contact;

pub use contact::{Contact, ContactDraft};
