//! # password-hasher
//!
//! bcrypt password hashing for registration and login flows.
//!
//! - **auth**: the hasher, the two entry points and an async offload service
//! - **config**: cost factor loaded from the environment
//! - **error**: failure reasons behind the `None`/`false` results

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;

pub use auth::{encrypt_password, verify_password, HashInfo, PasswordHasher, PasswordService};
pub use config::Config;
pub use error::{HashError, Result};
