use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::purge::DeleteStrategy;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the OAuth client secret JSON downloaded from the provider.
    #[clap(long, default_value = "credentials.json")]
    pub credentials: PathBuf,

    /// Where the access/refresh token pair is persisted between runs.
    #[clap(long, default_value = "token.json")]
    pub token: PathBuf,

    /// JSON file holding an array of sender addresses to purge.
    #[clap(long, default_value = "mails.json")]
    pub senders_file: PathBuf,

    /// Purge this sender instead of reading the senders file. Repeatable.
    #[clap(long = "sender", value_name = "ADDRESS")]
    pub senders: Vec<String>,

    /// How matched messages are removed.
    #[clap(long, value_enum, default_value_t = DeleteStrategy::Batch)]
    pub mode: DeleteStrategy,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            credentials_path: self.credentials,
            token_path: self.token,
            senders_path: self.senders_file,
            senders: self.senders,
            strategy: self.mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_paths() {
        let cli = Cli::parse_from(["mailsweep"]);
        let config = cli.into_config();
        assert_eq!(config.credentials_path, PathBuf::from("credentials.json"));
        assert_eq!(config.token_path, PathBuf::from("token.json"));
        assert_eq!(config.senders_path, PathBuf::from("mails.json"));
        assert!(config.senders.is_empty());
        assert_eq!(config.strategy, DeleteStrategy::Batch);
    }

    #[test]
    fn repeated_sender_flags_keep_their_order() {
        let cli = Cli::parse_from([
            "mailsweep",
            "--sender",
            "a@x.com",
            "--sender",
            "b@x.com",
            "--mode",
            "individual",
        ]);
        let config = cli.into_config();
        assert_eq!(config.senders, vec!["a@x.com", "b@x.com"]);
        assert_eq!(config.strategy, DeleteStrategy::Individual);
    }
}
