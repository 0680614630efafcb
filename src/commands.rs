use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use password_hasher::dto::{HashResponse, InspectResponse, VerifyResponse};
use password_hasher::{HashInfo, PasswordHasher};

/// Write `data` as pretty JSON if `json` is true, otherwise call `human_fmt`.
fn output<T: Serialize, W: Write>(
    out: &mut W,
    data: &T,
    json: bool,
    human_fmt: impl FnOnce(&mut W, &T) -> std::io::Result<()>,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
    } else {
        human_fmt(out, data)?;
    }
    Ok(())
}

/// Use the password given on the command line, or the first line of `input`.
fn read_password(password: Option<String>, input: impl BufRead) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => read_first_line(input),
    }
}

/// First line of `input` without its line ending.
fn read_first_line(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn cmd_hash(
    hasher: PasswordHasher,
    password: Option<String>,
    json: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let password = read_password(password, input)?;
    let hashed = hasher.try_hash(&password)?;

    let response = HashResponse {
        hash: String::from_utf8(hashed)?,
        cost: hasher.cost(),
    };
    output(out, &response, json, |out, r| writeln!(out, "{}", r.hash))
}

/// Returns whether the password matched, so the caller can set the exit code.
pub fn cmd_verify(
    hasher: PasswordHasher,
    hash: &str,
    password: Option<String>,
    json: bool,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let password = read_password(password, input)?;

    let matched = match hasher.try_verify(&password, hash.as_bytes()) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::warn!(error = %e, "Stored hash rejected");
            false
        }
    };

    let response = VerifyResponse {
        matched,
        needs_rehash: matched && hasher.needs_rehash(hash.as_bytes()),
    };
    output(out, &response, json, |out, r| {
        writeln!(out, "{}", if r.matched { "match" } else { "no match" })?;
        if r.needs_rehash {
            writeln!(out, "hash should be regenerated at cost {}", hasher.cost())?;
        }
        Ok(())
    })?;

    Ok(matched)
}

pub fn cmd_inspect(
    hasher: PasswordHasher,
    hash: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let info = HashInfo::parse(hash.as_bytes()).context("Not a bcrypt hash")?;

    let response = InspectResponse {
        info,
        needs_rehash: hasher.needs_rehash(hash.as_bytes()),
    };
    output(out, &response, json, |out, r| {
        writeln!(out, "cost: {}", r.info.cost)?;
        writeln!(out, "salt: {}", r.info.salt)?;
        writeln!(out, "needs rehash: {}", r.needs_rehash)
    })
}
