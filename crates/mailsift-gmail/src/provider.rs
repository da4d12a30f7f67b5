//! The provider seam consumed by the rule engine.

use crate::error::Result;
use crate::types::{Label, MessageRef, RemoteMessage};

/// Operations the rule engine needs from a mail provider.
///
/// `mailsift-core` is generic over this trait: action handlers and the sync
/// service take the provider as an explicit argument instead of reaching for
/// a process-wide client. Tests substitute a recording fake.
///
/// All label mutations must be idempotent: re-applying the same add/remove
/// set to the same ids is a no-op on the provider side, never an error.
#[allow(async_fn_in_trait)]
pub trait MailProvider {
    /// List up to `max_results` message references, newest first.
    async fn list_messages(&self, max_results: u32) -> Result<Vec<MessageRef>>;

    /// Fetch a single message's metadata headers and snippet.
    async fn get_message(&self, id: &str) -> Result<RemoteMessage>;

    /// List all labels known to the account.
    async fn list_labels(&self) -> Result<Vec<Label>>;

    /// Add and/or remove labels on a batch of messages.
    async fn batch_modify(
        &self,
        ids: &[String],
        add_label_ids: &[String],
        remove_label_ids: &[String],
    ) -> Result<()>;
}
