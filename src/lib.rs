pub mod cli;
pub mod config;
pub mod error;
pub mod gmail_api;
pub mod purge;
pub mod senders;
pub mod types;

use config::Config;
use error::SweepError;
use gmail_api::GmailClient;

/// Authenticate, resolve the sender list, then purge each sender in
/// order. Setup failures come back as errors; per-sender failures are
/// logged inside the purge loop and do not abort the run.
pub async fn run(config: &Config) -> Result<(), SweepError> {
    let client = GmailClient::connect(config).await?;
    let senders = senders::resolve_senders(config)?;
    purge::purge_senders(&client, &senders, config.strategy).await;
    Ok(())
}
