//! Store data models.

use chrono::{DateTime, Utc};

/// Locally cached subset of a remote message's metadata and snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedMessage {
    /// Provider-assigned message id, unique across the store.
    pub message_id: String,
    /// Sender address (`From` header).
    pub from_addr: String,
    /// Recipient address (`To` header).
    pub to_addr: String,
    /// Message subject, when the header was present.
    pub subject: Option<String>,
    /// Short plain-text preview of the body.
    pub snippet: Option<String>,
    /// Message date, when the header was present and parseable.
    pub date: Option<DateTime<Utc>>,
}
