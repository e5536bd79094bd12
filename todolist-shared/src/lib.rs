//! # Todo List Shared Library
//!
//! This crate contains the data layer and authentication primitives used by
//! the todo list API server.
//!
//! ## Module Organization
//!
//! - `db`: Connection pooling and schema bootstrap
//! - `models`: Credential, list and task records with their queries
//! - `auth`: Password hashing

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
