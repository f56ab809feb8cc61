use clap::ValueEnum;
use log::warn;

use crate::gmail_api::MailApi;

/// IDs requested per list call.
pub const SEARCH_PAGE_SIZE: u32 = 500;

/// Provider hard limit on IDs per batch-delete call.
pub const BATCH_DELETE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeleteStrategy {
    /// Batch-delete calls of up to 1000 message IDs each.
    Batch,
    /// One delete call per message ID.
    Individual,
}

/// Collect the IDs of every message from `sender`, paginating until the
/// continuation token runs out. A failed list call ends pagination for
/// this sender; IDs accumulated so far are kept.
pub async fn find_sender_messages<A: MailApi + ?Sized>(api: &A, sender: &str) -> Vec<String> {
    let query = format!("from:{}", sender);
    let mut ids = Vec::new();
    let mut page_token = String::new();

    loop {
        match api
            .list_message_ids(&query, SEARCH_PAGE_SIZE, &page_token)
            .await
        {
            Ok(page) => {
                let last = page.is_last();
                page_token = page.next_page_token.unwrap_or_default();
                ids.extend(page.ids);
                if last {
                    break;
                }
            }
            Err(e) => {
                warn!("listing messages from {} failed: {}", sender, e);
                break;
            }
        }
    }
    ids
}

/// Delete the given messages with the chosen strategy. Returns how many
/// were deleted; failures are logged and skipped, never retried.
pub async fn delete_messages<A: MailApi + ?Sized>(
    api: &A,
    sender: &str,
    ids: &[String],
    strategy: DeleteStrategy,
) -> usize {
    match strategy {
        DeleteStrategy::Batch => delete_in_batches(api, sender, ids).await,
        DeleteStrategy::Individual => delete_individually(api, sender, ids).await,
    }
}

async fn delete_in_batches<A: MailApi + ?Sized>(api: &A, sender: &str, ids: &[String]) -> usize {
    let mut deleted = 0;
    for chunk in ids.chunks(BATCH_DELETE_LIMIT) {
        match api.batch_delete(chunk).await {
            Ok(()) => {
                println!("Batch deleted {} messages from: {}", chunk.len(), sender);
                deleted += chunk.len();
            }
            Err(e) => {
                warn!(
                    "batch delete of {} messages from {} failed: {}",
                    chunk.len(),
                    sender,
                    e
                );
            }
        }
    }
    deleted
}

async fn delete_individually<A: MailApi + ?Sized>(api: &A, sender: &str, ids: &[String]) -> usize {
    let mut deleted = 0;
    for id in ids {
        match api.delete_message(id).await {
            Ok(()) => deleted += 1,
            Err(e) => warn!("deleting message {} failed: {}", id, e),
        }
    }
    if deleted > 0 {
        println!("Deleted {} messages from: {}", deleted, sender);
    }
    deleted
}

/// Process each sender in order: search, then delete whatever matched.
/// One sender finishes completely before the next begins.
pub async fn purge_senders<A: MailApi + ?Sized>(
    api: &A,
    senders: &[String],
    strategy: DeleteStrategy,
) -> usize {
    let mut total = 0;
    for sender in senders {
        println!("Searching for messages from: {}", sender);
        let ids = find_sender_messages(api, sender).await;
        if !ids.is_empty() {
            total += delete_messages(api, sender, &ids, strategy).await;
        }
        println!("Completed processing messages from: {}", sender);
    }
    total
}
