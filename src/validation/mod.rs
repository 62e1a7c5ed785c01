//! Pure validation of contact drafts.
//!
//! [`validate`] maps a [`ContactDraft`] to a [`ValidationReport`]: a fresh,
//! field-indexed set of human-readable error messages. It is deterministic,
//! has no side effects, and accumulates all failures instead of stopping at
//! the first one. An empty error set is the one and only "valid" state.

use crate::models::ContactDraft;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Maximum length of the free-form notes field.
pub const NOTES_MAX_CHARS: usize = 500;

/// Minimum length of the first/last name fields.
pub const NAME_MIN_CHARS: usize = 2;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Applied after separators are stripped: optional "+", non-zero leading
// digit, at most 15 further digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex"));

/// A draft field that validation or the error panel can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Telephone,
    Company,
    Address,
    Notes,
}

impl Field {
    /// Stable snake_case name, matching the wire field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Telephone => "telephone",
            Field::Company => "company",
            Field::Address => "address",
            Field::Notes => "notes",
        }
    }

    /// Human-readable label for panel rendering ("first name", "email", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
            Field::Telephone => "telephone",
            Field::Company => "company",
            Field::Address => "address",
            Field::Notes => "notes",
        }
    }

    /// All fields in display order.
    pub fn all() -> [Field; 7] {
        [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Telephone,
            Field::Company,
            Field::Address,
            Field::Notes,
        ]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(Field::FirstName),
            "last_name" => Ok(Field::LastName),
            "email" => Ok(Field::Email),
            "telephone" => Ok(Field::Telephone),
            "company" => Ok(Field::Company),
            "address" => Ok(Field::Address),
            "notes" => Ok(Field::Notes),
            other => Err(format!("unknown field: {}", other)),
        }
    }
}

/// Field-indexed validation error messages.
///
/// Holds exactly one message per failing field; absence of a key is the valid
/// state for that field. The validator always rebuilds this mapping in full,
/// while per-field removal (`remove`) exists for the error panel's optimistic
/// clear on edit. Iteration order is the stable field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is failing.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it is currently failing.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether a field is currently failing.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Remove a field's entry. Returns the removed message; no-op when the
    /// field was not failing.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Iterate over `(field, message)` pairs in stable field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Join all messages into a single line, in field order.
    pub fn to_summary(&self) -> String {
        self.errors
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_summary())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a Field, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// The verdict of one validation pass.
///
/// Validity is derived from the error set rather than stored, so
/// `is_valid() == errors.is_empty()` holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One entry per failing field.
    pub errors: ValidationErrors,
}

impl ValidationReport {
    /// True iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the report, yielding its error set.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

/// Validate a contact draft.
///
/// Every rule runs independently; a failure on one field never suppresses the
/// checks on another. Empty optional fields produce no errors.
pub fn validate(draft: &ContactDraft) -> ValidationReport {
    let mut errors = ValidationErrors::new();

    check_name(&mut errors, Field::FirstName, &draft.first_name, "First name");
    check_name(&mut errors, Field::LastName, &draft.last_name, "Last name");

    if !draft.email.is_empty() && !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if !draft.telephone.is_empty() && !is_valid_phone(&draft.telephone) {
        errors.insert(Field::Telephone, "Please enter a valid phone number");
    }

    if draft.notes.chars().count() > NOTES_MAX_CHARS {
        errors.insert(Field::Notes, "Notes cannot exceed 500 characters");
    }

    ValidationReport { errors }
}

fn check_name(errors: &mut ValidationErrors, field: Field, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", label));
    } else if value.chars().count() < NAME_MIN_CHARS {
        errors.insert(field, format!("{} must be at least 2 characters", label));
    }
}

/// Phone check after stripping the usual formatting separators.
fn is_valid_phone(phone: &str) -> bool {
    let cleaned: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_draft() {
        let report = validate(&draft());
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_names_required() {
        let mut d = draft();
        d.first_name = "".to_string();
        d.last_name = "   ".to_string();

        let report = validate(&d);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors.get(Field::FirstName),
            Some("First name is required")
        );
        assert_eq!(
            report.errors.get(Field::LastName),
            Some("Last name is required")
        );
    }

    #[test]
    fn test_name_min_length_distinct_message() {
        let mut d = draft();
        d.first_name = "A".to_string();

        let report = validate(&d);
        assert_eq!(
            report.errors.get(Field::FirstName),
            Some("First name must be at least 2 characters")
        );
        // Not the "required" variant
        assert!(!report.errors.get(Field::FirstName).unwrap().contains("required"));
    }

    #[test]
    fn test_single_error_scenario() {
        // {first_name:"A", last_name:"Bee", everything else empty}
        let d = ContactDraft {
            first_name: "A".to_string(),
            last_name: "Bee".to_string(),
            ..Default::default()
        };

        let report = validate(&d);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors.get(Field::FirstName),
            Some("First name must be at least 2 characters")
        );
    }

    #[test]
    fn test_email_optional_and_pattern() {
        let mut d = draft();
        d.email = "".to_string();
        assert!(validate(&d).is_valid());

        d.email = "a@b.co".to_string();
        assert!(validate(&d).is_valid());

        d.email = "not-an-email".to_string();
        let report = validate(&d);
        assert_eq!(
            report.errors.get(Field::Email),
            Some("Please enter a valid email address")
        );

        d.email = "spaces in@mail.com".to_string();
        assert!(validate(&d).errors.contains(Field::Email));

        d.email = "missing@dot".to_string();
        assert!(validate(&d).errors.contains(Field::Email));
    }

    #[test]
    fn test_telephone_separator_stripping() {
        let mut d = draft();
        d.telephone = "+1 (555) 123-4567".to_string();
        assert!(validate(&d).is_valid());

        d.telephone = "5551234567".to_string();
        assert!(validate(&d).is_valid());
    }

    #[test]
    fn test_telephone_leading_zero_invalid() {
        let mut d = draft();
        d.telephone = "0123".to_string();
        let report = validate(&d);
        assert_eq!(
            report.errors.get(Field::Telephone),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_telephone_length_cap() {
        let mut d = draft();
        // 16 digits total: at the limit
        d.telephone = "1234567890123456".to_string();
        assert!(validate(&d).is_valid());

        // 17 digits: over the limit
        d.telephone = "12345678901234567".to_string();
        assert!(validate(&d).errors.contains(Field::Telephone));
    }

    #[test]
    fn test_notes_length_boundary() {
        let mut d = draft();
        d.notes = "x".repeat(500);
        assert!(validate(&d).is_valid());

        d.notes = "x".repeat(501);
        let report = validate(&d);
        assert_eq!(
            report.errors.get(Field::Notes),
            Some("Notes cannot exceed 500 characters")
        );
    }

    #[test]
    fn test_company_address_unvalidated() {
        let mut d = draft();
        d.company = "!!!".to_string();
        d.address = "@".repeat(1000);
        assert!(validate(&d).is_valid());
    }

    #[test]
    fn test_errors_accumulate() {
        let d = ContactDraft {
            first_name: "".to_string(),
            last_name: "B".to_string(),
            email: "bad".to_string(),
            telephone: "0".to_string(),
            notes: "n".repeat(501),
            ..Default::default()
        };

        let report = validate(&d);
        assert_eq!(report.errors.len(), 5);
        assert!(report.errors.contains(Field::FirstName));
        assert!(report.errors.contains(Field::LastName));
        assert!(report.errors.contains(Field::Email));
        assert!(report.errors.contains(Field::Telephone));
        assert!(report.errors.contains(Field::Notes));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let d = ContactDraft {
            first_name: "A".to_string(),
            last_name: "".to_string(),
            email: "nope".to_string(),
            ..Default::default()
        };

        let first = validate(&d);
        let second = validate(&d);
        assert_eq!(first, second);
    }

    #[test]
    fn test_errors_iterate_in_field_order() {
        let d = ContactDraft {
            first_name: "".to_string(),
            last_name: "".to_string(),
            notes: "n".repeat(501),
            ..Default::default()
        };

        let report = validate(&d);
        let fields: Vec<Field> = report.errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::LastName, Field::Notes]);
    }

    #[test]
    fn test_summary_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::FirstName, "First name is required");
        errors.insert(Field::Email, "Please enter a valid email address");

        assert_eq!(
            errors.to_summary(),
            "First name is required, Please enter a valid email address"
        );
    }

    #[test]
    fn test_field_names_and_labels() {
        assert_eq!(Field::FirstName.as_str(), "first_name");
        assert_eq!(Field::FirstName.label(), "first name");
        assert_eq!(Field::Telephone.to_string(), "telephone");
        assert_eq!(Field::all().len(), 7);
    }
}
