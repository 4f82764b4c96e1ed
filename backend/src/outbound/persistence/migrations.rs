//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::RepositoryError;

/// Migrations from `backend/migrations`, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply every pending migration to the database at `url`.
///
/// Runs on a blocking thread because the migration harness needs a
/// synchronous connection.
///
/// # Errors
///
/// Returns [`RepositoryError::Connection`] when the database is unreachable
/// and [`RepositoryError::Query`] when a migration fails.
pub async fn run_pending_migrations(url: &str) -> Result<(), RepositoryError> {
    let url = url.to_owned();
    tokio::task::spawn_blocking(move || migrate(&url))
        .await
        .map_err(|err| RepositoryError::query(format!("migration task failed: {err}")))?
}

fn migrate(url: &str) -> Result<(), RepositoryError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| RepositoryError::connection(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| RepositoryError::query(format!("migration: {err}")))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
