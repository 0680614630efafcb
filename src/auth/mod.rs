pub mod auth_service;
pub mod password;

pub use auth_service::PasswordService;
pub use password::{
    encrypt_password, verify_password, HashInfo, PasswordHasher, DEFAULT_COST, MAX_COST,
    MAX_PASSWORD_BYTES, MIN_COST,
};
