//! `MailSift` - Gmail rule filter
//!
//! Fetches recent messages into a local cache and applies a declarative
//! rule set: All/Any condition groups selecting messages, and actions
//! (mark read/unread, move to folder) dispatched as batch label changes.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;

use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailsift_core::{MessageRepository, RuleRunner, load_rules, sync_messages};
use mailsift_gmail::GmailClient;

use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailsift=info,mailsift_core=info,mailsift_gmail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            tracing::error!(error = format!("{error:#}"), "aborting");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<bool> {
    let config = Config::from_env()?;
    info!(rules = %config.rules_path.display(), db = %config.database_path, "starting MailSift");

    let repo = MessageRepository::new(&config.database_path)
        .await
        .context("opening message store")?;
    let provider = GmailClient::new(config.token);

    sync_messages(&provider, &repo, config.max_results)
        .await
        .context("syncing messages")?;

    let rules = load_rules(&config.rules_path).context("loading rules")?;
    let messages = repo.get_all().await.context("reading message store")?;

    let runner = RuleRunner::new(&provider);
    let report = runner.apply_rules(&rules, &messages).await;
    info!(
        completed = report.rules_completed,
        failed = report.rules_failed,
        matched = report.total_matched,
        "run finished"
    );
    Ok(report.is_clean())
}
