use crate::error::ContactError;
use crate::model::{ContactMessage, ContactSubmission};
use crate::store::ContactStore;
use tracing::{info, instrument};

/// Upper bound on messages returned by [`ContactService::recent`].
pub const MESSAGE_LIMIT: usize = 100;

/// Intake and retrieval of contact messages over a [`ContactStore`].
#[derive(Debug, Clone)]
pub struct ContactService<S> {
    store: S,
}

impl<S: ContactStore> ContactService<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates, stamps and persists a submission, returning the stored record.
    ///
    /// Invalid submissions never reach the store.
    #[instrument(skip_all)]
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactMessage, ContactError> {
        let valid = submission
            .validate()
            .map_err(|violations| ContactError::Validation { violations, context: None })?;

        let message = ContactMessage::new(valid);
        self.store
            .insert(&message)
            .await
            .map_err(|source| ContactError::Intake { source, context: None })?;

        info!(id = %message.id, "Contact message stored");
        Ok(message)
    }

    /// Up to [`MESSAGE_LIMIT`] messages, newest first.
    #[instrument(skip_all)]
    pub async fn recent(&self) -> Result<Vec<ContactMessage>, ContactError> {
        self.store
            .latest(MESSAGE_LIMIT)
            .await
            .map_err(|source| ContactError::Retrieval { source, context: None })
    }
}
