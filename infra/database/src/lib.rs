//! # Database Infrastructure
//!
//! Owns the single [SurrealDB](https://surrealdb.com) connection the service keeps for its
//! whole lifetime and brings its schema up to date on startup.
//!
//! Any URL accepted by the `any` engine works: `mem://` for tests and local runs,
//! `ws://` / `http://` for a remote server, `rocksdb://` with the `storage-rocksdb` feature.
//!
//! ## Example
//!
//! ```rust
//! use folio_database::{Database, DatabaseError, Migration};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder()
//!         .url("mem://")
//!         .session("folio", "portfolio")
//!         .migrations([Migration::new("demo", "0001", "DEFINE TABLE note SCHEMALESS;")])
//!         .init()
//!         .await?;
//!
//!     let _version = db.version().await?;
//!     Ok(())
//! }
//! ```

mod error;
mod migrations;

pub use error::{DatabaseError, DatabaseErrorExt};
pub use migrations::Migration;

use migrations::MigrationRunner;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{debug, info, instrument, warn};

const CONNECT_ATTEMPTS: u32 = 3;
const FIRST_RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Connection {
    client: Surreal<Any>,
    namespace: String,
    database: String,
}

impl Drop for Connection {
    fn drop(&mut self) {
        info!(ns = %self.namespace, db = %self.database, "SurrealDB connection released");
    }
}

/// Shared handle to the store connection.
///
/// Clones share one client; the connection closes when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct Database {
    connection: Arc<Connection>,
}

impl Database {
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::default()
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.connection.namespace
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.connection.database
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.connection.client
    }
}

/// Collects connection settings and schema migrations, then opens the [`Database`].
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    namespace: Option<String>,
    database: Option<String>,
    credentials: Option<Credentials>,
    migrations: Vec<Migration>,
}

struct Credentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("username", &self.username).finish_non_exhaustive()
    }
}

impl DatabaseBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Namespace and database selected once connected.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self.database = Some(database.into());
        self
    }

    /// Root credentials; engines such as `mem://` need none.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials =
            Some(Credentials { username: username.into(), password: password.into() });
        self
    }

    /// Appends schema migrations. They run in the order given.
    pub fn migrations(mut self, migrations: impl IntoIterator<Item = Migration>) -> Self {
        self.migrations.extend(migrations);
        self
    }

    /// Connects, signs in, selects the session and applies pending migrations.
    ///
    /// The engine gets three health checks, with the delay doubling from 500ms,
    /// before the connection is given up.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] when url, namespace or database is missing.
    /// * [`DatabaseError::Connection`] when the engine cannot start or stays unhealthy.
    /// * [`DatabaseError::Auth`] when the credentials are rejected.
    /// * [`DatabaseError::Surreal`] when the session cannot be selected or a script fails.
    /// * [`DatabaseError::Migration`] when an applied migration was edited afterwards.
    #[instrument(skip(self), fields(url = self.url, ns = self.namespace, db = self.database))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = required(self.url, "URL")?;
        let namespace = required(self.namespace, "Namespace")?;
        let database = required(self.database, "Database")?;

        let client = connect_healthy(&url).await?;

        if let Some(Credentials { username, password }) = self.credentials {
            client.signin(Root { username, password }).await.map_err(|e| DatabaseError::Auth {
                message: e.to_string().into(),
                context: Some(url.clone().into()),
            })?;
        }

        client.use_ns(&namespace).use_db(&database).await.context("Selecting session")?;

        let version = client.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(%namespace, %database, %version, "SurrealDB connection established");

        let report = MigrationRunner::new(&client).run(&self.migrations).await?;
        for key in &report.skipped {
            debug!(migration = %key, "Migration already applied");
        }
        for key in &report.applied {
            info!(migration = %key, "Migration applied");
        }

        Ok(Database { connection: Arc::new(Connection { client, namespace, database }) })
    }
}

fn required(value: Option<String>, what: &'static str) -> Result<String, DatabaseError> {
    value.ok_or_else(|| DatabaseError::Validation {
        message: format!("{what} is required").into(),
        context: None,
    })
}

async fn connect_healthy(url: &str) -> Result<Surreal<Any>, DatabaseError> {
    let client = connect(url).await.map_err(|e| DatabaseError::Connection {
        message: e.to_string().into(),
        context: Some("Starting engine".into()),
    })?;

    let mut delay = FIRST_RETRY_DELAY;
    for attempt in 1..=CONNECT_ATTEMPTS {
        if client.health().await.is_ok() {
            return Ok(client);
        }
        if attempt < CONNECT_ATTEMPTS {
            warn!(attempt, ?delay, "Database not ready, retrying");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }

    Err(DatabaseError::Connection {
        message: format!("unhealthy after {CONNECT_ATTEMPTS} attempts").into(),
        context: Some(url.to_owned().into()),
    })
}
