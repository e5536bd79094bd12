/// Schema bootstrap
///
/// The service owns exactly three tables (`creds`, `lists`, `tasks`). Their
/// DDL lives in the workspace-level `migrations/` directory and is embedded
/// into the binary at compile time, so startup only has to apply whatever
/// has not been applied yet.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::db::migrations::{get_migration_status, run_migrations};
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::new(std::env::var("DATABASE_URL")?)).await?;
///
///     run_migrations(&pool).await?;
///
///     let status = get_migration_status(&pool).await?;
///     println!("Applied {} migrations", status.applied_migrations);
///     Ok(())
/// }
/// ```

use sqlx::{
    migrate::{MigrateDatabase, Migrator},
    postgres::PgPool,
    Postgres,
};
use tracing::{debug, info, warn};

/// Embedded migrations (path is relative to this crate's Cargo.toml)
static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Migration status information
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Number of migrations that have been applied
    pub applied_migrations: usize,

    /// Latest applied migration version (timestamp)
    pub latest_version: Option<i64>,

    /// Whether every embedded migration has been applied
    pub is_up_to_date: bool,
}

/// Number of migrations compiled into this binary
pub fn embedded_migration_count() -> usize {
    MIGRATOR.iter().filter(|m| m.migration_type.is_up_migration()).count()
}

/// Applies all pending migrations
///
/// Idempotent: already-applied migrations are skipped, and every statement
/// uses `IF NOT EXISTS`, so the three tables exist after this returns `Ok`.
///
/// # Errors
///
/// Returns an error if a migration fails or an applied migration was
/// modified after it ran.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!(
        embedded = embedded_migration_count(),
        "Starting database migrations"
    );

    match MIGRATOR.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Reports how many migrations have been applied
///
/// # Errors
///
/// Returns an error if the bookkeeping table cannot be queried.
pub async fn get_migration_status(pool: &PgPool) -> Result<MigrationStatus, sqlx::Error> {
    debug!("Checking migration status");

    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = current_schema()
            AND table_name = '_sqlx_migrations'
        )",
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        debug!("Migrations table does not exist yet");
        return Ok(MigrationStatus {
            applied_migrations: 0,
            latest_version: None,
            is_up_to_date: embedded_migration_count() == 0,
        });
    }

    let (count, latest_version): (i64, Option<i64>) = sqlx::query_as(
        "SELECT
            COUNT(*) as count,
            MAX(version) as latest_version
         FROM _sqlx_migrations
         WHERE success = true",
    )
    .fetch_one(pool)
    .await?;

    debug!(
        applied_migrations = count,
        latest_version = ?latest_version,
        "Migration status retrieved"
    );

    let applied = count as usize;
    Ok(MigrationStatus {
        applied_migrations: applied,
        latest_version,
        is_up_to_date: applied >= embedded_migration_count(),
    })
}

/// Creates the database named in the URL if it does not exist yet
///
/// Meant for development and tests; production databases are provisioned
/// out of band.
///
/// # Errors
///
/// Returns an error if the server is unreachable or the role may not create databases.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    info!("Checking if database exists");

    if !Postgres::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        Postgres::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_migration_per_table() {
        assert_eq!(embedded_migration_count(), 3);
    }

    #[test]
    fn test_migrations_create_expected_tables() {
        let sql: String = MIGRATOR.iter().map(|m| m.sql.as_ref()).collect();
        for table in ["creds", "lists", "tasks"] {
            assert!(
                sql.contains(&format!("CREATE TABLE IF NOT EXISTS {}", table)),
                "missing table {}",
                table
            );
        }
    }

    #[test]
    fn test_migrations_declare_no_foreign_keys() {
        for migration in MIGRATOR.iter() {
            assert!(
                !migration.sql.to_uppercase().contains("REFERENCES"),
                "{} adds a foreign key",
                migration.description
            );
        }
    }
}
