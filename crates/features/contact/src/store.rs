use crate::model::ContactMessage;
use chrono::{DateTime, Utc};
use folio_database::{Database, DatabaseError, DatabaseErrorExt};
use folio_domain::constants::CONTACT_MESSAGE;
use std::future::Future;
use surrealdb::types::{RecordId, SurrealValue};
use tracing::instrument;

/// Persistence seam of the contact slice.
pub trait ContactStore: Send + Sync + 'static {
    /// Writes one new message. Fails if a message with the same id exists.
    fn insert(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), DatabaseError>> + Send;

    /// Returns at most `limit` messages, newest first.
    fn latest(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ContactMessage>, DatabaseError>> + Send;
}

#[derive(Debug, SurrealValue)]
struct ContactContent {
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct ContactDocument {
    id: String,
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl From<ContactDocument> for ContactMessage {
    fn from(doc: ContactDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            subject: doc.subject,
            message: doc.message,
            timestamp: doc.timestamp,
        }
    }
}

/// [`ContactStore`] backed by the `contact_message` table.
#[derive(Debug, Clone)]
pub struct SurrealContactStore {
    db: Database,
}

impl SurrealContactStore {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ContactStore for SurrealContactStore {
    #[instrument(skip_all, fields(id = %message.id))]
    async fn insert(&self, message: &ContactMessage) -> Result<(), DatabaseError> {
        let record = RecordId::new(CONTACT_MESSAGE, message.id.clone());
        let content = ContactContent {
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            timestamp: message.timestamp,
        };

        self.db
            .query("CREATE $record CONTENT $content RETURN NONE")
            .bind(("record", record))
            .bind(("content", content))
            .await
            .context("Creating contact message")?
            .check()
            .context("Creating contact message")?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn latest(&self, limit: usize) -> Result<Vec<ContactMessage>, DatabaseError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let documents: Vec<ContactDocument> = self
            .db
            .query(format!(
                "SELECT record::id(id) AS id, name, email, subject, message, timestamp
                FROM {CONTACT_MESSAGE} ORDER BY timestamp DESC LIMIT $limit"
            ))
            .bind(("limit", limit))
            .await
            .context("Listing contact messages")?
            .take(0)
            .context("Decoding contact messages")?;

        Ok(documents.into_iter().map(ContactMessage::from).collect())
    }
}
