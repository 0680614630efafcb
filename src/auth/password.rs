//! Password hashing via bcrypt.
//!
//! Hashes are handed out as the raw bytes of the bcrypt modular-crypt string
//! (`$2b$<cost>$<salt><digest>`), so they can be stored and verified later
//! without keeping the salt or cost anywhere else.

use std::str::FromStr;

use bcrypt::HashParts;
use serde::Serialize;

use crate::error::{HashError, Result};

/// bcrypt cost factor used when nothing else is configured.
pub const DEFAULT_COST: u32 = 14;

/// Smallest cost bcrypt accepts.
pub const MIN_COST: u32 = 4;
/// Largest cost bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// bcrypt only reads this many bytes of a password; longer ones are refused
/// instead of being cut down.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt.
    pub fn try_hash(&self, password: &str) -> Result<Vec<u8>> {
        check_password(password)?;

        tracing::debug!(cost = self.cost, "Hashing password");
        let hashed = bcrypt::hash(password, self.cost)?;
        Ok(hashed.into_bytes())
    }

    /// Check a password against a stored hash.
    ///
    /// A well-formed hash that doesn't match gives `Ok(false)`; every other
    /// problem (empty input, garbage bytes, foreign scheme) is an error.
    pub fn try_verify(&self, password: &str, hash: &[u8]) -> Result<bool> {
        check_password(password)?;

        let stored = hash_str(hash)?;
        // bcrypt::verify parses again; this pass is what reports MalformedHash
        parse_parts(stored)?;
        Ok(bcrypt::verify(password, stored)?)
    }

    /// Like [`try_hash`](Self::try_hash), but empty input and failures both
    /// come back as `None`.
    pub fn hash<'a>(&self, password: impl Into<Option<&'a str>>) -> Option<Vec<u8>> {
        let password = password.into().filter(|p| !p.is_empty())?;

        match self.try_hash(password) {
            Ok(hashed) => Some(hashed),
            Err(e) => {
                tracing::warn!(error = %e, "Password hashing failed");
                None
            }
        }
    }

    /// Like [`try_verify`](Self::try_verify), but anything other than a
    /// confirmed match is `false`.
    pub fn verify<'a, 'b>(
        &self,
        password: impl Into<Option<&'a str>>,
        hash: impl Into<Option<&'b [u8]>>,
    ) -> bool {
        let (Some(password), Some(hash)) = (password.into(), hash.into()) else {
            return false;
        };
        if password.is_empty() || hash.is_empty() {
            return false;
        }

        match self.try_verify(password, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting stored hash");
                false
            }
        }
    }

    /// Whether a stored hash should be replaced by one made with this
    /// hasher's cost. Unreadable hashes always need replacing.
    pub fn needs_rehash(&self, hash: &[u8]) -> bool {
        match HashInfo::parse(hash) {
            Ok(info) => info.cost != self.cost,
            Err(_) => true,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

/// Parameters embedded in a stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashInfo {
    pub cost: u32,
    pub salt: String,
}

impl HashInfo {
    pub fn parse(hash: &[u8]) -> Result<Self> {
        let parts = parse_parts(hash_str(hash)?)?;
        Ok(Self {
            cost: parts.get_cost(),
            salt: parts.get_salt(),
        })
    }
}

fn check_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(HashError::EmptyPassword);
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(HashError::PasswordTooLong(password.len()));
    }
    Ok(())
}

fn hash_str(hash: &[u8]) -> Result<&str> {
    if hash.is_empty() {
        return Err(HashError::EmptyHash);
    }
    std::str::from_utf8(hash).map_err(|_| HashError::MalformedHash("not valid UTF-8".into()))
}

fn parse_parts(hash: &str) -> Result<HashParts> {
    HashParts::from_str(hash).map_err(|e| HashError::MalformedHash(e.to_string()))
}

/// Hash a password at the default cost. Empty or absent input, and any
/// hashing failure, yield `None`; never store that.
pub fn encrypt_password<'a>(password: impl Into<Option<&'a str>>) -> Option<Vec<u8>> {
    PasswordHasher::default().hash(password)
}

/// Check a password against a stored hash. Empty, absent or malformed input
/// is reported as a non-match.
pub fn verify_password<'a, 'b>(
    plaintext: impl Into<Option<&'a str>>,
    hash: impl Into<Option<&'b [u8]>>,
) -> bool {
    PasswordHasher::default().verify(plaintext, hash)
}
