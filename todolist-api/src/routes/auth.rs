/// Registration and login
///
/// # Endpoints
///
/// - `POST /register` - Store a new credential
/// - `POST /login` - Check a password and return the user's numeric ID
///
/// Login issues no token or session. The returned ID is all the client gets,
/// and no other route checks it.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use todolist_shared::{
    auth::password::{self, PasswordError},
    models::credential::{CreateCredential, Credential},
};

/// Register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,

    /// Plaintext password; only its hash is stored
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /register
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "p" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored credential, minus the password hash:
///
/// ```json
/// {
///   "user_id": 1,
///   "email": "a@x.com",
///   "createdAt": "2025-01-01T00:00:00Z",
///   "updatedAt": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: hashing or storage failed
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<Credential>)> {
    let password_hash = hash_off_runtime(req.password).await?;

    let cred = Credential::create(
        &state.db,
        CreateCredential {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = cred.user_id, "Registered user");

    Ok((StatusCode::CREATED, Json(cred)))
}

/// Log in
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "p" }
/// ```
///
/// # Response
///
/// `200 OK` with the bare user ID as the body:
///
/// ```json
/// 1
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: unknown email or wrong password
/// - `500 Internal Server Error`: storage failed
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<i32>> {
    let cred = Credential::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(ApiError::bad_credentials)?;

    let user_id = cred.user_id;
    let valid = match verify_off_runtime(req.password, cred.password).await? {
        Ok(valid) => valid,
        Err(PasswordError::InvalidHash(e)) => {
            tracing::warn!(user_id, "Stored password hash is unreadable: {}", e);
            false
        }
        Err(e) => return Err(e.into()),
    };

    if !valid {
        return Err(ApiError::bad_credentials());
    }

    Ok(Json(user_id))
}

/// Argon2 is CPU-bound and runs on the blocking pool
async fn hash_off_runtime(plain: String) -> ApiResult<String> {
    let hash = tokio::task::spawn_blocking(move || password::hash_password(&plain))
        .await
        .map_err(|e| ApiError::InternalError(format!("Hashing task failed: {}", e)))??;

    Ok(hash)
}

async fn verify_off_runtime(
    plain: String,
    hash: String,
) -> ApiResult<Result<bool, PasswordError>> {
    tokio::task::spawn_blocking(move || password::verify_password(&plain, &hash))
        .await
        .map_err(|e| ApiError::InternalError(format!("Verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_hashing_leaves_the_runtime_free() {
        // Current-thread runtime: the timer can only fire if hashing yields
        let start = Instant::now();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            start.elapsed()
        });

        let mut hashes = Vec::new();
        for _ in 0..5 {
            hashes.push(hash_off_runtime("p".to_string()).await.unwrap());
        }
        let hashing = start.elapsed();

        let fired_after = timer.await.unwrap();
        assert!(
            fired_after < hashing,
            "timer fired after {:?}, hashing took {:?}",
            fired_after,
            hashing
        );

        let verified = verify_off_runtime("p".to_string(), hashes.remove(0))
            .await
            .unwrap()
            .unwrap();
        assert!(verified);
    }

    #[tokio::test]
    async fn test_verify_off_runtime_reports_unreadable_hash() {
        let result = verify_off_runtime("p".to_string(), "not-a-hash".to_string())
            .await
            .unwrap();
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let result: Result<LoginRequest, _> =
            serde_json::from_value(serde_json::json!({ "email": "a@x.com" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_request_rejects_non_string_password() {
        let result: Result<RegisterRequest, _> =
            serde_json::from_value(serde_json::json!({ "email": "a@x.com", "password": 1234 }));
        assert!(result.is_err());
    }
}
