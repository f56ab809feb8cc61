use std::path::PathBuf;

use crate::purge::DeleteStrategy;

/// Every file the tool touches, named explicitly and injected at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client secret JSON downloaded from the provider console.
    pub credentials_path: PathBuf,
    /// Where the access/refresh token pair is persisted between runs.
    pub token_path: PathBuf,
    /// JSON array of sender addresses, used when `senders` is empty.
    pub senders_path: PathBuf,
    /// Explicit sender list; non-empty means the file is never read.
    pub senders: Vec<String>,
    pub strategy: DeleteStrategy,
}
