use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Option<Vec<MessageRef>>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageRef {
    pub id: Option<String>,
}

/// One page of search results: message IDs in provider order plus the
/// continuation token for the next call. An absent or empty token means
/// the result set is exhausted.
#[derive(Debug, Default)]
pub struct MessagePage {
    pub ids: Vec<String>,
    pub next_page_token: Option<String>,
}

impl MessagePage {
    pub fn is_last(&self) -> bool {
        match &self.next_page_token {
            Some(token) => token.is_empty(),
            None => true,
        }
    }
}

/// Token pair persisted between runs. The file is overwritten whole on
/// every save, including saves triggered by a transparent refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Expiry as epoch seconds.
    pub expires_at_epoch: Option<i64>,
    pub token_type: String,
}
