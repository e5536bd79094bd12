/// Authentication utilities
///
/// - [`password`]: Argon2id password hashing and constant-time verification
///
/// Login in this service only checks a password and hands back the numeric
/// user id; there are no sessions or tokens to manage.

pub mod password;
