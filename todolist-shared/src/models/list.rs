/// List model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE lists (
///     list_id SERIAL PRIMARY KEY,
///     list_name VARCHAR(255) NOT NULL,
///     user_id INTEGER NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// `user_id` is not a foreign key. A list may name a user that does not
/// exist, and deleting a list leaves its tasks in `tasks`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

const COLUMNS: &str = "list_id, list_name, user_id, created_at, updated_at";

/// A named todo list owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct List {
    /// Generated list ID
    pub list_id: i32,

    pub list_name: String,

    /// Owning user (unchecked)
    pub user_id: i32,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateList {
    pub list_name: String,
    pub user_id: i32,
}

impl List {
    /// Inserts a list and returns it with its generated `list_id`
    pub async fn create(pool: &PgPool, data: CreateList) -> Result<Self, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(&format!(
            "INSERT INTO lists (list_name, user_id) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        ))
        .bind(data.list_name)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(list)
    }

    /// All lists owned by `user_id`, oldest first; empty if there are none
    pub async fn find_by_user(pool: &PgPool, user_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let lists = sqlx::query_as::<_, List>(&format!(
            "SELECT {} FROM lists WHERE user_id = $1 ORDER BY list_id",
            COLUMNS
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(lists)
    }

    pub async fn find_by_id(pool: &PgPool, list_id: i32) -> Result<Option<Self>, sqlx::Error> {
        let list = sqlx::query_as::<_, List>(&format!(
            "SELECT {} FROM lists WHERE list_id = $1",
            COLUMNS
        ))
        .bind(list_id)
        .fetch_optional(pool)
        .await?;

        Ok(list)
    }

    /// Renames a list
    ///
    /// # Returns
    ///
    /// Number of rows changed (0 if no list has this ID)
    pub async fn rename(pool: &PgPool, list_id: i32, list_name: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE lists
            SET list_name = $2, updated_at = NOW()
            WHERE list_id = $1
            "#,
        )
        .bind(list_id)
        .bind(list_name)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a list; its tasks are left untouched
    ///
    /// # Returns
    ///
    /// Number of rows deleted (0 if no list has this ID)
    pub async fn delete(pool: &PgPool, list_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lists WHERE list_id = $1")
            .bind(list_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_serializes_with_column_names() {
        let list = List {
            list_id: 7,
            list_name: "Groceries".to_string(),
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["list_id"], 7);
        assert_eq!(json["list_name"], "Groceries");
        assert_eq!(json["user_id"], 1);
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert!(json.get("created_at").is_none());
    }
}
