/// Credential model and database operations
///
/// A credential is a registered user: an email plus a password hash. Rows are
/// written by registration and read by login; nothing updates or deletes them.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE creds (
///     user_id SERIAL PRIMARY KEY,
///     email VARCHAR(255) NOT NULL,
///     password VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use todolist_shared::auth::password::hash_password;
/// use todolist_shared::models::credential::{CreateCredential, Credential};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let cred = Credential::create(
///     &pool,
///     CreateCredential {
///         email: "a@x.com".to_string(),
///         password_hash: hash_password("p")?,
///     },
/// )
/// .await?;
///
/// let found = Credential::find_by_email(&pool, "a@x.com").await?;
/// assert_eq!(found.map(|c| c.user_id), Some(cred.user_id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

const COLUMNS: &str = "user_id, email, password, created_at, updated_at";

/// A registered user
///
/// `password` holds an Argon2id PHC hash and is never serialized, so a
/// credential can be returned from the API as-is.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Credential {
    /// Generated user ID
    pub user_id: i32,

    /// Email address, matched exactly on login
    pub email: String,

    /// Argon2id password hash
    #[serde(skip_serializing)]
    pub password: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a credential
#[derive(Debug, Clone)]
pub struct CreateCredential {
    pub email: String,

    /// Already-hashed password (NOT plaintext!)
    pub password_hash: String,
}

impl Credential {
    /// Inserts a credential and returns it with its generated `user_id`
    ///
    /// The same email may be registered more than once.
    pub async fn create(pool: &PgPool, data: CreateCredential) -> Result<Self, sqlx::Error> {
        let cred = sqlx::query_as::<_, Credential>(&format!(
            "INSERT INTO creds (email, password) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        ))
        .bind(data.email)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(cred)
    }

    /// Finds the credential registered under `email` (exact, case-sensitive)
    ///
    /// If the email was registered more than once the earliest row wins.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let cred = sqlx::query_as::<_, Credential>(&format!(
            "SELECT {} FROM creds WHERE email = $1 ORDER BY user_id LIMIT 1",
            COLUMNS
        ))
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(cred)
    }

    /// Finds a credential by ID
    pub async fn find_by_id(pool: &PgPool, user_id: i32) -> Result<Option<Self>, sqlx::Error> {
        let cred = sqlx::query_as::<_, Credential>(&format!(
            "SELECT {} FROM creds WHERE user_id = $1",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(cred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_omits_password() {
        let cred = Credential {
            user_id: 1,
            email: "a@x.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&cred).unwrap();
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("password").is_none());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }
}
