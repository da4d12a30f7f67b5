//! # mailsift-gmail
//!
//! Gmail REST API client for `MailSift`.
//!
//! This crate covers the small slice of the Gmail API the rule engine
//! needs:
//!
//! - **Message listing and retrieval**: ids plus metadata headers and the
//!   snippet, enough to populate the local cache
//! - **Label listing**: resolving human-readable folder names to label ids
//! - **Batch label modification**: the idempotent add/remove calls behind
//!   mark-read/unread and move-to-folder actions
//!
//! The [`MailProvider`] trait is the seam consumed by `mailsift-core`;
//! [`GmailClient`] is the production implementation. Token acquisition and
//! refresh are the caller's responsibility — the client is handed a valid
//! bearer token at construction and reuses it for its lifetime.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailsift_gmail::{GmailClient, MailProvider};
//!
//! #[tokio::main]
//! async fn main() -> mailsift_gmail::Result<()> {
//!     let client = GmailClient::new("ya29.access-token");
//!
//!     for label in client.list_labels().await? {
//!         println!("{}: {}", label.id, label.name);
//!     }
//!
//!     let refs = client.list_messages(20).await?;
//!     for msg_ref in &refs {
//!         let msg = client.get_message(&msg_ref.id).await?;
//!         println!("{:?}", msg.header("Subject"));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod provider;
mod types;

pub use client::GmailClient;
pub use error::{Error, Result};
pub use provider::MailProvider;
pub use types::{BatchModifyRequest, Header, Label, MessagePayload, MessageRef, RemoteMessage};
