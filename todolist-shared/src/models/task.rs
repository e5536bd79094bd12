/// Task model and database operations
///
/// Tasks hang off a list by `list_id`. Description, status and owning list
/// are each changed by their own single-column update, so concurrent edits
/// to different fields of the same task do not overwrite each other.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     task_id SERIAL PRIMARY KEY,
///     task_description VARCHAR(255) NOT NULL,
///     list_id INTEGER NOT NULL,
///     task_status VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Status
///
/// `task_status` is free text. There is no state machine: `"done"` and
/// `"banana"` are equally valid.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::models::task::{CreateTask, Task};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let task = Task::create(
///     &pool,
///     CreateTask {
///         task_description: "Buy milk".to_string(),
///         list_id: 42,
///         task_status: "todo".to_string(),
///     },
/// )
/// .await?;
///
/// Task::update_status(&pool, task.task_id, "done").await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

const COLUMNS: &str = "task_id, task_description, list_id, task_status, created_at, updated_at";

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Generated task ID
    pub task_id: i32,

    pub task_description: String,

    /// Owning list (unchecked)
    pub list_id: i32,

    /// Free-form status
    pub task_status: String,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub task_description: String,
    pub list_id: i32,
    pub task_status: String,
}

impl Task {
    /// Inserts a task and returns it with its generated `task_id`
    ///
    /// The list is not checked; a task may reference a list that does not exist.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(&format!(
            r#"
            INSERT INTO tasks (task_description, list_id, task_status)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(data.task_description)
        .bind(data.list_id)
        .bind(data.task_status)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// All tasks in `list_id`, oldest first
    pub async fn find_by_list(pool: &PgPool, list_id: i32) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE list_id = $1 ORDER BY task_id",
            COLUMNS
        ))
        .bind(list_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    pub async fn find_by_id(pool: &PgPool, task_id: i32) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE task_id = $1",
            COLUMNS
        ))
        .bind(task_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Moves a task to another list. Returns the number of rows changed.
    pub async fn move_to_list(pool: &PgPool, task_id: i32, list_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET list_id = $2, updated_at = NOW() WHERE task_id = $1",
        )
        .bind(task_id)
        .bind(list_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replaces a task's description. Returns the number of rows changed.
    pub async fn update_description(
        pool: &PgPool,
        task_id: i32,
        task_description: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET task_description = $2, updated_at = NOW() WHERE task_id = $1",
        )
        .bind(task_id)
        .bind(task_description)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Sets a task's status to any string. Returns the number of rows changed.
    pub async fn update_status(
        pool: &PgPool,
        task_id: i32,
        task_status: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET task_status = $2, updated_at = NOW() WHERE task_id = $1",
        )
        .bind(task_id)
        .bind(task_status)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a task. Returns the number of rows deleted.
    pub async fn delete(pool: &PgPool, task_id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE task_id = $1")
            .bind(task_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_deserializes() {
        let data: CreateTask = serde_json::from_value(serde_json::json!({
            "task_description": "Buy milk",
            "list_id": 42,
            "task_status": "banana"
        }))
        .unwrap();

        assert_eq!(data.list_id, 42);
        assert_eq!(data.task_status, "banana");
    }

    #[test]
    fn test_create_task_rejects_string_list_id() {
        let result: Result<CreateTask, _> = serde_json::from_value(serde_json::json!({
            "task_description": "Buy milk",
            "list_id": "forty-two",
            "task_status": "todo"
        }));

        assert!(result.is_err());
    }
}
