use std::path::PathBuf;

use thiserror::Error;

/// Failures a caller can observe and recover from. Only `main` turns one
/// of these into a process exit.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("unable to read client secret {path:?}: {reason}")]
    ClientSecret { path: PathBuf, reason: String },

    #[error("authorization failed: {0}")]
    Auth(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("sender list {path:?}: {reason}")]
    SenderList { path: PathBuf, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API call failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
