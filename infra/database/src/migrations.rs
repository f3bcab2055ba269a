use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashMap;
use sha2::{Digest, Sha256};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

/// A versioned `SurrealQL` schema script owned by a feature slice.
///
/// Scripts are applied once, in registration order, inside a transaction.
/// Editing a script after it has been applied is detected through its checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub slice: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

impl Migration {
    #[must_use]
    pub const fn new(slice: &'static str, version: &'static str, script: &'static str) -> Self {
        Self { slice, version, script }
    }

    /// Hex-encoded SHA-256 of the script body.
    #[must_use]
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.script.as_bytes()))
    }

    fn key(&self) -> String {
        format!("{}:{}", self.slice, self.version)
    }
}

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, SurrealValue)]
struct AppliedMigration {
    slice: String,
    version: String,
    checksum: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner<'a> {
    db: &'a Surreal<Any>,
}

impl<'a> MigrationRunner<'a> {
    pub(crate) const fn new(db: &'a Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(&self, migrations: &[Migration]) -> Result<MigrationReport, DatabaseError> {
        let mut report = MigrationReport::default();

        self.db
            .query(
                "DEFINE TABLE IF NOT EXISTS migration SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS migration_key ON migration FIELDS slice, version UNIQUE;",
            )
            .await
            .context("Preparing migration ledger")?
            .check()
            .context("Preparing migration ledger")?;

        let applied = self.applied_migrations().await?;

        for migration in migrations {
            let checksum = migration.checksum();
            if let Some(existing) = applied.get(&migration.key()) {
                ensure_checksum_match(migration, existing, &checksum)?;
                report.skipped.push(migration.key());
                continue;
            }

            self.apply(migration, checksum).await?;
            report.applied.push(migration.key());
        }

        Ok(report)
    }

    async fn apply(&self, migration: &Migration, checksum: String) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration CONTENT {{
                slice: $slice,
                version: $version,
                checksum: $checksum,
                applied_at: time::now()
            }};
            COMMIT TRANSACTION;",
            migration.script,
        );

        let context = format!("Applying migration {}", migration.key());
        self.db
            .query(query)
            .bind(("slice", migration.slice.to_owned()))
            .bind(("version", migration.version.to_owned()))
            .bind(("checksum", checksum))
            .await
            .context(context.clone())?
            .check()
            .context(context)?;

        Ok(())
    }

    async fn applied_migrations(&self) -> Result<FxHashMap<String, String>, DatabaseError> {
        let entries = self
            .db
            .query("SELECT slice, version, checksum FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .context("Parsing applied migrations")?;

        Ok(entries
            .into_iter()
            .map(|entry| (format!("{}:{}", entry.slice, entry.version), entry.checksum))
            .collect())
    }
}

fn ensure_checksum_match(
    migration: &Migration,
    existing: &str,
    checksum: &str,
) -> Result<(), DatabaseError> {
    if existing == checksum {
        return Ok(());
    }

    Err(DatabaseError::Migration {
        message: format!(
            "Checksum mismatch for {} (applied {existing}, found {checksum})",
            migration.key()
        )
        .into(),
        context: Some("Migration already applied with different content".into()),
    })
}
