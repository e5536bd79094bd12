/// API route handlers
///
/// Organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Registration and login
/// - `lists`: List CRUD
/// - `tasks`: Task CRUD
///
/// Each data handler issues exactly one database statement.

pub mod auth;
pub mod health;
pub mod lists;
pub mod tasks;
