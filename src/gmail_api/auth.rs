use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use time::OffsetDateTime;
use yup_oauth2::authenticator::DefaultAuthenticator;
use yup_oauth2::storage::{TokenInfo, TokenStorage};
use yup_oauth2::{InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use crate::config::Config;
use crate::error::SweepError;
use crate::types::StoredToken;

/// Full-access scope; batch delete is rejected under the narrower ones.
pub const OAUTH_SCOPES: &[&str] = &["https://mail.google.com/"];

const TOKEN_TYPE: &str = "Bearer";

/// Read the persisted token. Two reads without an intervening refresh
/// return structurally equal values.
pub fn read_token(path: &Path) -> Result<StoredToken, SweepError> {
    let data = fs::read_to_string(path)
        .map_err(|e| SweepError::TokenStore(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&data)
        .map_err(|e| SweepError::TokenStore(format!("{}: {}", path.display(), e)))
}

/// Persist the token, overwriting any prior content.
pub fn write_token(path: &Path, token: &StoredToken) -> Result<(), SweepError> {
    let data = serde_json::to_string_pretty(token)
        .map_err(|e| SweepError::TokenStore(e.to_string()))?;
    fs::write(path, data)
        .map_err(|e| SweepError::TokenStore(format!("{}: {}", path.display(), e)))
}

/// Token storage backed by a single JSON file at a configured path.
///
/// The authenticator calls `set` for every token it obtains, including
/// transparent refreshes, so the file never holds a stale token after a
/// refresh. This app requests one fixed scope set, so the file holds one
/// token and the scope argument is not keyed on.
pub struct DiskTokenStore {
    path: PathBuf,
}

impl DiskTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TokenStorage for DiskTokenStore {
    async fn set(&self, _scopes: &[&str], token: TokenInfo) -> anyhow::Result<()> {
        let stored = StoredToken {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at_epoch: token.expires_at.map(|t| t.unix_timestamp()),
            token_type: TOKEN_TYPE.to_string(),
        };
        write_token(&self.path, &stored)
            .with_context(|| format!("persisting token to {}", self.path.display()))
    }

    async fn get(&self, _scopes: &[&str]) -> Option<TokenInfo> {
        // Missing or corrupt file: no token, which sends the
        // authenticator through the interactive flow.
        let stored = read_token(&self.path).ok()?;
        Some(TokenInfo {
            access_token: stored.access_token,
            refresh_token: stored.refresh_token,
            expires_at: stored
                .expires_at_epoch
                .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok()),
            id_token: None,
        })
    }
}

/// Authenticated Gmail client: a reqwest client plus the authenticator
/// that hands out (and refreshes) the access token.
pub struct GmailClient {
    pub(crate) http: reqwest::Client,
    auth: DefaultAuthenticator,
}

impl GmailClient {
    /// Load the client secret, wire up token persistence, and run the
    /// interactive flow if no usable token is on disk. The first token
    /// fetch happens here, not lazily on the first list call.
    pub async fn connect(config: &Config) -> Result<Self, SweepError> {
        let secret = yup_oauth2::read_application_secret(&config.credentials_path)
            .await
            .map_err(|e| SweepError::ClientSecret {
                path: config.credentials_path.clone(),
                reason: e.to_string(),
            })?;

        let store = DiskTokenStore::new(config.token_path.clone());
        let auth =
            InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::Interactive)
                .with_storage(Box::new(store))
                .build()
                .await
                .map_err(|e| SweepError::Auth(e.to_string()))?;

        let client = Self {
            http: reqwest::Client::new(),
            auth,
        };
        client.access_token().await?;
        Ok(client)
    }

    /// Current access token; refreshed and re-persisted by the
    /// authenticator when expired.
    pub(crate) async fn access_token(&self) -> Result<String, SweepError> {
        let token = self
            .auth
            .token(OAUTH_SCOPES)
            .await
            .map_err(|e| SweepError::Auth(e.to_string()))?;
        match token.token() {
            Some(value) => Ok(value.to_string()),
            None => Err(SweepError::Auth(
                "token response carried no access token".to_string(),
            )),
        }
    }
}
