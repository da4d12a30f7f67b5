//! Message synchronization: provider → local store.

use mailsift_gmail::{MailProvider, RemoteMessage};

use crate::Result;
use crate::store::{CachedMessage, MessageRepository};

/// Fetch recent messages from the provider and cache them locally.
///
/// Messages are fetched one by one and stored as a single transactional
/// batch, so a failed write never leaves the store partially updated.
/// Returns the number of messages stored; an empty remote listing is not
/// an error.
///
/// # Errors
///
/// Returns an error if a provider call or the store write fails.
pub async fn sync_messages<P: MailProvider>(
    provider: &P,
    repo: &MessageRepository,
    max_results: u32,
) -> Result<usize> {
    tracing::info!(max_results, "fetching messages");

    let refs = provider.list_messages(max_results).await?;
    if refs.is_empty() {
        tracing::info!("no messages found");
        return Ok(0);
    }

    let mut cached = Vec::with_capacity(refs.len());
    for message_ref in &refs {
        let message = provider.get_message(&message_ref.id).await?;
        cached.push(to_cached(&message));
    }

    repo.store_messages(&cached).await?;
    tracing::info!(count = cached.len(), "stored messages");
    Ok(cached.len())
}

fn to_cached(message: &RemoteMessage) -> CachedMessage {
    CachedMessage {
        message_id: message.id.clone(),
        from_addr: message.header("From").unwrap_or_default().to_string(),
        to_addr: message.header("To").unwrap_or_default().to_string(),
        subject: message.header("Subject").map(str::to_string),
        snippet: (!message.snippet.is_empty()).then(|| message.snippet.clone()),
        date: message.date(),
    }
}
