/// Database layer
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with a startup health check
/// - `migrations`: Creates the `creds`, `lists` and `tasks` tables
///
/// Records and their queries live in the `models` module at crate root.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::db::{migrations::run_migrations, pool::{create_pool, DatabaseConfig}};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
