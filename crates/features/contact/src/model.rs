use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use folio_derive::api_model;
use folio_kernel::safe_nanoid;
use folio_kernel::validation::FieldViolation;
use std::str::FromStr;

/// Length of generated message identifiers.
pub const MESSAGE_ID_LEN: usize = 20;

const EMPTY: &str = "must not be empty";
const INVALID_EMAIL: &str = "must be a valid email address";

/// A candidate message as posted by a visitor.
///
/// Extra fields are ignored, so a client cannot smuggle in its own `id` or `timestamp`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    #[cfg_attr(feature = "server", schema(example = "John Smith"))]
    pub name: String,
    #[cfg_attr(feature = "server", schema(example = "john.smith@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "server", schema(example = "Business Inquiry"))]
    pub subject: String,
    #[cfg_attr(feature = "server", schema(example = "I would like to discuss a potential project."))]
    pub message: String,
}

impl ContactSubmission {
    /// Checks every field and reports all violations at once, in field order.
    pub fn validate(self) -> Result<ValidContact, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if is_blank(&self.name) {
            violations.push(FieldViolation::new("name", EMPTY));
        }
        if is_blank(&self.email) {
            violations.push(FieldViolation::new("email", EMPTY));
        } else if !is_valid_email(&self.email) {
            violations.push(FieldViolation::new("email", INVALID_EMAIL));
        }
        if is_blank(&self.subject) {
            violations.push(FieldViolation::new("subject", EMPTY));
        }
        if is_blank(&self.message) {
            violations.push(FieldViolation::new("message", EMPTY));
        }

        if violations.is_empty() { Ok(ValidContact(self)) } else { Err(violations) }
    }
}

/// A submission that passed [`ContactSubmission::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact(ContactSubmission);

impl ValidContact {
    #[must_use]
    pub fn submission(&self) -> &ContactSubmission {
        &self.0
    }
}

/// A persisted contact message. Never mutated after creation.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ContactMessage {
    #[cfg_attr(feature = "server", schema(example = "k7Hq3ZtW9mPxR2cVb8Nf"))]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactMessage {
    /// Stamps a validated submission with a fresh id and the current UTC time.
    #[must_use]
    pub fn new(contact: ValidContact) -> Self {
        let ContactSubmission { name, email, subject, message } = contact.0;
        Self { id: safe_nanoid!(MESSAGE_ID_LEN), name, email, subject, message, timestamp: Utc::now() }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// Plain `local@domain` only: display names, domain literals and bare hosts such as
// `user@localhost` are rejected.
fn is_valid_email(value: &str) -> bool {
    EmailAddress::from_str(value).is_ok_and(|address| {
        let domain = address.domain();
        address.email() == value
            && !domain.starts_with('[')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    })
}
