mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use password_hasher::Config;

fn main() -> Result<ExitCode> {
    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,password_hasher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match cli.cost {
        Some(cost) => Config::with_cost(cost)?,
        None => Config::from_env()?,
    };
    let hasher = config.hasher()?;
    tracing::debug!(cost = hasher.cost(), "Configuration loaded");

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    // Errors returned from main exit with status 1 as well
    match cli.command {
        Command::Hash { password } => {
            commands::cmd_hash(hasher, password, cli.json, stdin, &mut stdout)?;
        }
        Command::Verify { hash, password } => {
            if !commands::cmd_verify(hasher, &hash, password, cli.json, stdin, &mut stdout)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Inspect { hash } => commands::cmd_inspect(hasher, &hash, cli.json, &mut stdout)?,
    }

    Ok(ExitCode::SUCCESS)
}
