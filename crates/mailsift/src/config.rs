//! Process configuration from arguments and environment.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};

const DEFAULT_RULES_FILE: &str = "rules.json";
const DEFAULT_DATABASE: &str = "mailsift.db";
const DEFAULT_MAX_RESULTS: u32 = 20;

/// Resolved process configuration.
#[derive(Debug)]
pub struct Config {
    /// Path to the rules file (first positional argument).
    pub rules_path: PathBuf,
    /// SQLite database path (`MAILSIFT_DB`).
    pub database_path: String,
    /// Messages fetched per sync (`MAILSIFT_MAX_RESULTS`).
    pub max_results: u32,
    /// Gmail bearer token (`GMAIL_ACCESS_TOKEN`).
    pub token: String,
}

impl Config {
    /// Build configuration from argv and environment variables.
    ///
    /// # Errors
    ///
    /// Fails when `GMAIL_ACCESS_TOKEN` is unset or `MAILSIFT_MAX_RESULTS`
    /// is not a positive integer.
    pub fn from_env() -> anyhow::Result<Self> {
        let rules_path = env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_RULES_FILE.to_string())
            .into();

        let database_path =
            env::var("MAILSIFT_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        let max_results = match env::var("MAILSIFT_MAX_RESULTS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("MAILSIFT_MAX_RESULTS must be a positive integer")?,
            Err(_) => DEFAULT_MAX_RESULTS,
        };
        if max_results == 0 {
            bail!("MAILSIFT_MAX_RESULTS must be a positive integer");
        }

        let token =
            env::var("GMAIL_ACCESS_TOKEN").context("GMAIL_ACCESS_TOKEN must be set")?;

        Ok(Self {
            rules_path,
            database_path,
            max_results,
            token,
        })
    }
}
