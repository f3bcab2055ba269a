//! Contact feature slice: visitor messages are validated, stamped and stored, then listed
//! newest first.
//!
//! The slice owns the `contact_message` table and registers its schema through
//! [`MIGRATIONS`].

mod error;
#[cfg(feature = "server")]
pub mod handlers;
pub mod model;
mod service;
pub mod store;

pub use error::{ContactError, ContactErrorExt};
pub use model::{ContactMessage, ContactSubmission, ValidContact};
pub use service::{ContactService, MESSAGE_LIMIT};
pub use store::{ContactStore, SurrealContactStore};

use folio_database::{Database, Migration};
use folio_kernel::domain::registry::InitializedSlice;

pub const SLICE_NAME: &str = "contact";

/// Schema scripts, applied in order by the database builder.
pub const MIGRATIONS: &[Migration] = &[Migration::new(
    SLICE_NAME,
    "0001_contact_message",
    include_str!("../migrations/0001_contact_message.surql"),
)];

/// Contact feature state.
#[folio_derive::folio_slice]
pub struct Contact {
    pub service: ContactService<SurrealContactStore>,
}

/// Initialize the contact feature over an already migrated connection.
#[must_use]
pub fn init(db: &Database) -> InitializedSlice {
    tracing::info!("Contact slice initialized");

    let store = SurrealContactStore::new(db.clone());
    let slice = Contact::new(ContactInner { service: ContactService::new(store) });
    InitializedSlice::new(slice)
}
