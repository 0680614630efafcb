use crate::auth::PasswordHasher;
use crate::error::Result;

/// Runs bcrypt on tokio's blocking pool so registration and login handlers
/// don't stall the runtime while a hash is computed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordService {
    hasher: PasswordHasher,
}

impl PasswordService {
    pub fn new(hasher: PasswordHasher) -> Self {
        Self { hasher }
    }

    pub fn hasher(&self) -> PasswordHasher {
        self.hasher
    }

    pub async fn try_hash_password(&self, password: &str) -> Result<Vec<u8>> {
        let hasher = self.hasher;
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.try_hash(&password)).await?
    }

    pub async fn try_verify_password(&self, password: &str, hash: &[u8]) -> Result<bool> {
        let hasher = self.hasher;
        let password = password.to_owned();
        let hash = hash.to_vec();

        tokio::task::spawn_blocking(move || hasher.try_verify(&password, &hash)).await?
    }

    pub async fn hash_password(&self, password: Option<&str>) -> Option<Vec<u8>> {
        let password = password.filter(|p| !p.is_empty())?;

        match self.try_hash_password(password).await {
            Ok(hashed) => Some(hashed),
            Err(e) => {
                tracing::warn!(error = %e, "Password hashing failed");
                None
            }
        }
    }

    pub async fn verify_password(&self, password: Option<&str>, hash: Option<&[u8]>) -> bool {
        let (Some(password), Some(hash)) = (password, hash) else {
            return false;
        };
        if password.is_empty() || hash.is_empty() {
            return false;
        }

        match self.try_verify_password(password, hash).await {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting stored hash");
                false
            }
        }
    }
}
