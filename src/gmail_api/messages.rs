use crate::error::SweepError;
use crate::gmail_api::{GmailClient, GMAIL_API_BASE, USER_ID};
use crate::types::{MessagePage, MessagesResponse};

/// Fetch one page of message IDs matching `query`. An empty `page_token`
/// requests the first page.
pub async fn list_message_ids(
    client: &GmailClient,
    query: &str,
    page_size: u32,
    page_token: &str,
) -> Result<MessagePage, SweepError> {
    let token = client.access_token().await?;

    let list_url = format!("{}/users/{}/messages", GMAIL_API_BASE, USER_ID);
    let max_results = page_size.to_string();
    let mut request = client
        .http
        .get(&list_url)
        .query(&[("q", query), ("maxResults", max_results.as_str())]);
    if !page_token.is_empty() {
        request = request.query(&[("pageToken", page_token)]);
    }

    let response = request.bearer_auth(&token).send().await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SweepError::Status { status, body });
    }

    let data: MessagesResponse = response.json().await?;
    let ids = data
        .messages
        .unwrap_or_default()
        .into_iter()
        .filter_map(|msg| msg.id)
        .collect();
    Ok(MessagePage {
        ids,
        next_page_token: data.next_page_token,
    })
}
