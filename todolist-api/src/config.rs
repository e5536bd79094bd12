/// Configuration management for the API server
///
/// Configuration is read once from environment variables at startup. A
/// `.env` file in the working directory is loaded first when present.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: PostgreSQL connection string (required; `URL` is accepted as a fallback)
/// - `HOST`: Host to bind to (default: 0.0.0.0)
/// - `PORT`: Port to bind to (default: 3000)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `CORS_ORIGINS`: Comma-separated allowed origins, `*` for any (default: *)
/// - `RUST_LOG`: Log filter
///
/// # Example
///
/// ```no_run
/// use todolist_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::env;
use todolist_shared::db::pool::DatabaseConfig as PoolConfig;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Origins allowed to make cross-origin requests (`*` = any)
    pub cors_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if no database URL is set or a numeric variable
    /// does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .or_else(|_| env::var("URL"))
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a number: {}", e))?;

        let cors_origins =
            parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()))?;

        Ok(Self {
            api: ApiConfig {
                host,
                port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Whether any origin may make cross-origin requests
    pub fn allows_any_origin(&self) -> bool {
        self.api.cors_origins.iter().any(|origin| origin == "*")
    }

    /// Pool settings derived from this configuration
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.database.max_connections,
            ..PoolConfig::new(self.database.url.clone())
        }
    }
}

/// Splits a comma-separated origin list, dropping blanks
///
/// Every entry must be a valid header value and at least one must remain.
fn parse_origins(raw: &str) -> anyhow::Result<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        anyhow::bail!("CORS_ORIGINS must list at least one origin or `*`");
    }

    for origin in &origins {
        HeaderValue::from_str(origin)
            .map_err(|e| anyhow::anyhow!("CORS_ORIGINS entry {:?} is invalid: {}", origin, e))?;
    }

    Ok(origins)
}
