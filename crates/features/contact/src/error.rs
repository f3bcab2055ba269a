use folio_database::DatabaseError;
use folio_kernel::validation::FieldViolation;
use std::borrow::Cow;

/// Failures of the contact intake and retrieval flow.
#[folio_derive::folio_error]
pub enum ContactError {
    /// The submission was rejected before reaching the store.
    #[error("Invalid contact submission{}: {}", format_context(.context), describe(.violations))]
    Validation { violations: Vec<FieldViolation>, context: Option<Cow<'static, str>> },

    /// The store did not accept the new message.
    #[error("Failed to save message{}: {source}", format_context(.context))]
    Intake { source: DatabaseError, context: Option<Cow<'static, str>> },

    /// The store could not list messages.
    #[error("Failed to retrieve messages{}: {source}", format_context(.context))]
    Retrieval { source: DatabaseError, context: Option<Cow<'static, str>> },
}

fn describe(violations: &[FieldViolation]) -> String {
    violations.iter().map(|v| format!("{} {}", v.field, v.message)).collect::<Vec<_>>().join(", ")
}

#[cfg(feature = "server")]
impl From<ContactError> for folio_kernel::server::ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation { violations, .. } => Self::validation(violations),
            other => Self::internal(other.to_string()),
        }
    }
}
