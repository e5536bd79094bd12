/// Password hashing with Argon2id
///
/// Credentials are stored as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
/// so the parameters travel with each hash and can be raised later without
/// invalidating stored credentials.
///
/// # Parameters
///
/// - **Memory**: 19 MiB (19456 KiB)
/// - **Iterations**: 2 passes
/// - **Parallelism**: 1 lane
/// - **Salt**: 16 random bytes per hash
///
/// On commodity hardware this costs roughly what bcrypt at cost 10 does.
///
/// # Example
///
/// ```
/// use todolist_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("p")?;
///
/// assert!(verify_password("p", &hash)?);
/// assert!(!verify_password("wrong", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, ParamsBuilder, Version,
};

/// Memory cost in KiB
pub const MEMORY_COST_KIB: u32 = 19_456;

/// Number of passes over memory
pub const TIME_COST: u32 = 2;

/// Degree of parallelism
pub const PARALLELISM: u32 = 1;

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Stored hash is not a valid PHC string
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

fn hasher() -> Result<Argon2<'static>, PasswordError> {
    let params = ParamsBuilder::new()
        .m_cost(MEMORY_COST_KIB)
        .t_cost(TIME_COST)
        .p_cost(PARALLELISM)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a plaintext password with a fresh random salt
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Checks a plaintext password against a stored PHC hash
///
/// The comparison is constant-time. Parameters are read from the hash itself.
///
/// # Returns
///
/// `Ok(true)` on a match, `Ok(false)` on a mismatch
///
/// # Errors
///
/// `PasswordError::InvalidHash` if `hash` cannot be parsed,
/// `PasswordError::VerifyError` for any other failure
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!("Verification failed: {}", e))),
    }
}
