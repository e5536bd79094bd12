/// Database models
///
/// # Models
///
/// - `credential`: Registered users and their password hashes
/// - `list`: Todo lists, owned by a user
/// - `task`: Tasks, owned by a list
///
/// Every operation is a single SQL statement. Ownership references are not
/// enforced by the database.
///
/// # Example
///
/// ```no_run
/// use todolist_shared::db::pool::{create_pool, DatabaseConfig};
/// use todolist_shared::models::list::{CreateList, List};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::new("postgresql://localhost/todo")).await?;
///
/// let list = List::create(
///     &pool,
///     CreateList {
///         list_name: "Groceries".to_string(),
///         user_id: 1,
///     },
/// )
/// .await?;
///
/// let lists = List::find_by_user(&pool, 1).await?;
/// assert!(lists.contains(&list));
/// # Ok(())
/// # }
/// ```

pub mod credential;
pub mod list;
pub mod task;
