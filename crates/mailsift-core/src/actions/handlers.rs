//! Action handlers calling the mail provider.

use mailsift_gmail::MailProvider;

use crate::error::{Error, Result};

const UNREAD_LABEL: &str = "UNREAD";
const INBOX_LABEL: &str = "INBOX";

/// Toggle read state on a batch of messages.
///
/// `READ` removes the `UNREAD` label, `UNREAD` adds it. Re-running either
/// on the same ids repeats the same provider call; the provider treats the
/// redundant mutation as a no-op.
pub(super) async fn mark_read_unread<P: MailProvider>(
    provider: &P,
    ids: &[String],
    label: &str,
) -> Result<()> {
    match label {
        "READ" => {
            provider
                .batch_modify(ids, &[], &[UNREAD_LABEL.to_string()])
                .await?;
        }
        "UNREAD" => {
            provider
                .batch_modify(ids, &[UNREAD_LABEL.to_string()], &[])
                .await?;
        }
        other => return Err(Error::UnknownReadState(other.to_string())),
    }
    tracing::info!(count = ids.len(), label, "toggled read state");
    Ok(())
}

/// Move a batch of messages out of the inbox into the named folder.
///
/// The folder name is matched case-insensitively against the provider's
/// label names; the mutation is a remove-INBOX call followed by an
/// add-label call.
pub(super) async fn move_to_folder<P: MailProvider>(
    provider: &P,
    ids: &[String],
    folder: &str,
) -> Result<()> {
    let labels = provider.list_labels().await?;
    let folder_lower = folder.to_lowercase();
    let target = labels
        .iter()
        .find(|label| label.name.to_lowercase() == folder_lower)
        .ok_or_else(|| Error::FolderNotFound(folder.to_string()))?;

    provider
        .batch_modify(ids, &[], &[INBOX_LABEL.to_string()])
        .await?;
    provider
        .batch_modify(ids, &[target.id.clone()], &[])
        .await?;

    tracing::info!(count = ids.len(), folder, label_id = %target.id, "moved messages");
    Ok(())
}
