use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "password-hasher")]
#[command(about = "Hash and verify passwords with bcrypt.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// bcrypt cost factor, overrides PASSWORD_HASH_COST
    #[arg(long, global = true)]
    pub cost: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Hash a password
    Hash {
        /// Password to hash (read from stdin when omitted)
        password: Option<String>,
    },

    /// Check a password against a stored hash
    Verify {
        /// Stored bcrypt hash
        #[arg(long)]
        hash: String,

        /// Password to check (read from stdin when omitted)
        password: Option<String>,
    },

    /// Show the cost and salt embedded in a stored hash
    Inspect {
        /// Stored bcrypt hash
        hash: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verify() {
        let cli = Cli::parse_from([
            "password-hasher",
            "--cost",
            "10",
            "verify",
            "--hash",
            "$2b$10$abc",
            "pw",
        ]);

        assert_eq!(cli.cost, Some(10));
        assert!(!cli.json);
        match cli.command {
            Command::Verify { hash, password } => {
                assert_eq!(hash, "$2b$10$abc");
                assert_eq!(password.as_deref(), Some("pw"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_hash_without_password() {
        let cli = Cli::parse_from(["password-hasher", "hash", "--json"]);

        assert!(cli.json);
        assert!(matches!(cli.command, Command::Hash { password: None }));
    }
}
