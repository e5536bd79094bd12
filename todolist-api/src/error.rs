/// Error handling for the API server
///
/// Handlers return `ApiResult<T>`. The error taxonomy has two tiers:
///
/// - `Unauthorized`: a login whose email or password does not match (401)
/// - `InternalError`: everything else, including every storage fault (500)
///
/// A 500 carries no body; its cause is logged and never sent to the client.
/// Zero rows affected by an update or delete is not an error.
///
/// # Example
///
/// ```
/// use todolist_api::error::{ApiError, ApiResult};
///
/// fn check(matches: bool) -> ApiResult<()> {
///     if !matches {
///         return Err(ApiError::bad_credentials());
///     }
///     Ok(())
/// }
///
/// assert!(check(false).is_err());
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todolist_shared::auth::password::PasswordError;

/// Message returned for any failed login
pub const BAD_CREDENTIALS_MESSAGE: &str = "Username or password incorrect";

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unauthorized (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// The 401 returned for an unknown email or a wrong password
    pub fn bad_credentials() -> Self {
        ApiError::Unauthorized(BAD_CREDENTIALS_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message).into_response(),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Every storage fault is a 500, including constraint violations
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalError(format!("Database error: {}", err))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}
