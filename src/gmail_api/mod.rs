//! Gmail API module split into logical submodules
//!
//! - auth: client secret loading, token persistence, the OAuth flow
//! - messages: paginated message search
//! - operations: message removal (single and batch)

pub mod auth;
pub mod messages;
pub mod operations;

use async_trait::async_trait;

pub use auth::GmailClient;

use crate::error::SweepError;
use crate::types::MessagePage;

pub const GMAIL_API_BASE: &str = "https://gmail.googleapis.com/gmail/v1";

/// The authenticated account; the API resolves it to the token's owner.
pub const USER_ID: &str = "me";

/// The remote calls the purge loop depends on, as a trait so tests can
/// mock the seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailApi: Send + Sync {
    /// One page of message IDs matching `query`. An empty `page_token`
    /// requests the first page.
    async fn list_message_ids(
        &self,
        query: &str,
        page_size: u32,
        page_token: &str,
    ) -> Result<MessagePage, SweepError>;

    /// Permanently delete a single message.
    async fn delete_message(&self, message_id: &str) -> Result<(), SweepError>;

    /// Permanently delete up to 1000 messages in one call.
    async fn batch_delete(&self, message_ids: &[String]) -> Result<(), SweepError>;
}

#[async_trait]
impl MailApi for GmailClient {
    async fn list_message_ids(
        &self,
        query: &str,
        page_size: u32,
        page_token: &str,
    ) -> Result<MessagePage, SweepError> {
        messages::list_message_ids(self, query, page_size, page_token).await
    }

    async fn delete_message(&self, message_id: &str) -> Result<(), SweepError> {
        operations::delete_message(self, message_id).await
    }

    async fn batch_delete(&self, message_ids: &[String]) -> Result<(), SweepError> {
        operations::batch_delete_messages(self, message_ids).await
    }
}
