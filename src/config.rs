use std::env::VarError;

use validator::Validate;

use crate::auth::{PasswordHasher, DEFAULT_COST};
use crate::error::{HashError, Result};

pub const COST_VAR: &str = "PASSWORD_HASH_COST";

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Config {
    #[validate(range(min = 4, max = 31))]
    pub cost: u32,
}

impl Config {
    /// Read `PASSWORD_HASH_COST`, falling back to the default cost when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(std::env::var(COST_VAR))
    }

    fn from_lookup(lookup: std::result::Result<String, VarError>) -> Result<Self> {
        match lookup {
            Ok(raw) => Self::from_cost_var(Some(&raw)),
            Err(VarError::NotPresent) => Self::from_cost_var(None),
            Err(VarError::NotUnicode(_)) => Err(HashError::Config(format!(
                "{COST_VAR} is not valid unicode"
            ))),
        }
    }

    fn from_cost_var(raw: Option<&str>) -> Result<Self> {
        let cost = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => value.parse().map_err(|_| {
                HashError::Config(format!("{COST_VAR} must be a number, got {value:?}"))
            })?,
            None => DEFAULT_COST,
        };

        Self::with_cost(cost)
    }

    pub fn with_cost(cost: u32) -> Result<Self> {
        let config = Self { cost };
        config.validate()?;
        Ok(config)
    }

    pub fn hasher(&self) -> Result<PasswordHasher> {
        PasswordHasher::new(self.cost)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_cost_uses_default() {
        assert_eq!(Config::from_cost_var(None).unwrap().cost, DEFAULT_COST);
        assert_eq!(Config::from_cost_var(Some("  ")).unwrap().cost, DEFAULT_COST);
        assert_eq!(Config::default().hasher().unwrap().cost(), DEFAULT_COST);
    }

    #[test]
    fn test_cost_is_parsed() {
        let config = Config::from_cost_var(Some(" 10 ")).unwrap();
        assert_eq!(config.cost, 10);
        assert_eq!(config.hasher().unwrap().cost(), 10);
    }

    #[test]
    fn test_env_lookup() {
        assert_eq!(
            Config::from_lookup(Err(VarError::NotPresent)).unwrap().cost,
            DEFAULT_COST
        );
        assert_eq!(Config::from_lookup(Ok("12".into())).unwrap().cost, 12);
        assert!(matches!(
            Config::from_lookup(Err(VarError::NotUnicode("\u{fffd}".into()))),
            Err(HashError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_cost_is_rejected() {
        assert!(matches!(
            Config::from_cost_var(Some("fourteen")),
            Err(HashError::Config(_))
        ));
        assert!(matches!(
            Config::from_cost_var(Some("-1")),
            Err(HashError::Config(_))
        ));
        assert!(matches!(Config::with_cost(3), Err(HashError::Config(_))));
        assert!(matches!(Config::with_cost(32), Err(HashError::Config(_))));
    }
}
