use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("Password is empty")]
    EmptyPassword,

    #[error("Password is {0} bytes, bcrypt accepts at most 72")]
    PasswordTooLong(usize),

    #[error("Stored hash is empty")]
    EmptyHash,

    #[error("Malformed hash: {0}")]
    MalformedHash(String),

    #[error("Invalid cost factor {0}, expected 4..=31")]
    InvalidCost(u32),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Blocking task failed: {0}")]
    Join(String),
}

impl From<validator::ValidationErrors> for HashError {
    fn from(err: validator::ValidationErrors) -> Self {
        HashError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for HashError {
    fn from(err: tokio::task::JoinError) -> Self {
        HashError::Join(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(HashError::EmptyPassword.to_string(), "Password is empty");
        assert_eq!(
            HashError::PasswordTooLong(80).to_string(),
            "Password is 80 bytes, bcrypt accepts at most 72"
        );
        assert_eq!(
            HashError::InvalidCost(40).to_string(),
            "Invalid cost factor 40, expected 4..=31"
        );
        assert_eq!(
            HashError::MalformedHash("bad prefix".into()).to_string(),
            "Malformed hash: bad prefix"
        );
    }
}
