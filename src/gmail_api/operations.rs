use crate::error::SweepError;
use crate::gmail_api::{GmailClient, GMAIL_API_BASE, USER_ID};

/// Permanently delete a single message.
pub async fn delete_message(client: &GmailClient, message_id: &str) -> Result<(), SweepError> {
    let token = client.access_token().await?;

    let delete_url = format!(
        "{}/users/{}/messages/{}",
        GMAIL_API_BASE, USER_ID, message_id
    );
    let response = client
        .http
        .delete(&delete_url)
        .bearer_auth(&token)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SweepError::Status { status, body })
    }
}

/// Permanently delete up to 1000 messages in one call. The caller is
/// responsible for staying under the provider's 1000-ID limit.
pub async fn batch_delete_messages(
    client: &GmailClient,
    message_ids: &[String],
) -> Result<(), SweepError> {
    let token = client.access_token().await?;

    let batch_url = format!("{}/users/{}/messages/batchDelete", GMAIL_API_BASE, USER_ID);
    let request_body = serde_json::json!({ "ids": message_ids });

    let response = client
        .http
        .post(&batch_url)
        .bearer_auth(&token)
        .json(&request_body)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(SweepError::Status { status, body })
    }
}
